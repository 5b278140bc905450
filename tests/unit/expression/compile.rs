use super::*;
use crate::expression::error::{ParseError, TokenizeError};
use crate::foundation::error::ScriptError;

fn var(name: &str) -> Operation {
    Operation::Push(Operand::Variable(name.to_owned()))
}

fn val(v: f64) -> Operation {
    Operation::Push(Operand::Value(v))
}

#[test]
fn compiles_postorder() {
    let expr = Expr::multiply(
        Expr::add(Expr::symbol("cat"), Expr::symbol("kitten")),
        Expr::Number(1.0),
    );
    assert_eq!(
        compile(&expr),
        vec![
            var("cat"),
            var("kitten"),
            Operation::Add,
            val(1.0),
            Operation::Multiply
        ]
    );
}

#[test]
fn leaves_compile_to_a_single_push() {
    assert_eq!(compile(&Expr::symbol("screen.x")), vec![var("screen.x")]);
    assert_eq!(compile(&Expr::Number(2.5)), vec![val(2.5)]);
}

#[test]
fn right_nested_subtraction_keeps_operator_order() {
    let code = Code::compile("1 - 2 - 3").unwrap();
    assert_eq!(
        code.operations(),
        &[
            val(1.0),
            val(2.0),
            val(3.0),
            Operation::Subtract,
            Operation::Subtract
        ]
    );
}

#[test]
fn divide_keeps_operand_order() {
    let code = Code::compile("window.width / 2").unwrap();
    assert_eq!(
        code.operations(),
        &[var("window.width"), val(2.0), Operation::Divide]
    );
}

#[test]
fn compile_source_reports_the_failing_stage() {
    assert!(matches!(
        Code::compile("1 +"),
        Err(ScriptError::Parse(ParseError::Incomplete { .. }))
    ));
    assert!(matches!(
        Code::compile("1 + #"),
        Err(ScriptError::Tokenize(TokenizeError::Incomplete { .. }))
    ));
    assert!(matches!(
        Code::compile(""),
        Err(ScriptError::Tokenize(TokenizeError::Empty))
    ));
}

#[test]
fn variables_lists_each_occurrence() {
    let code = Code::compile("screen.width - (screen.width * 0.125) * 2").unwrap();
    assert_eq!(
        code.variables().collect::<Vec<_>>(),
        vec!["screen.width", "screen.width"]
    );
    assert_eq!(code.len(), 7);
    assert!(!code.is_empty());
}
