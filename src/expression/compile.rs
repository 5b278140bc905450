use crate::expression::ast::Expr;
use crate::expression::bytecode::{Code, Operand, Operation};
use crate::expression::lexer::tokenize;
use crate::expression::parser::parse;
use crate::foundation::error::ScriptResult;

/// Lower `expr` to postfix instructions: left operand, right operand, operator.
pub fn compile(expr: &Expr) -> Vec<Operation> {
    let mut out = Vec::new();
    emit(expr, &mut out);
    out
}

fn emit(expr: &Expr, out: &mut Vec<Operation>) {
    let (left, right, op) = match expr {
        Expr::Symbol(name) => {
            out.push(Operation::Push(Operand::Variable(name.clone())));
            return;
        }
        Expr::Number(value) => {
            out.push(Operation::Push(Operand::Value(*value)));
            return;
        }
        Expr::Add(l, r) => (l, r, Operation::Add),
        Expr::Subtract(l, r) => (l, r, Operation::Subtract),
        Expr::Multiply(l, r) => (l, r, Operation::Multiply),
        Expr::Divide(l, r) => (l, r, Operation::Divide),
    };
    emit(left, out);
    emit(right, out);
    out.push(op);
}

#[tracing::instrument(level = "debug", err)]
pub(crate) fn compile_source(source: &str) -> ScriptResult<Code> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    let operations = compile(&expr);
    tracing::debug!(
        tokens = tokens.len(),
        depth = expr.depth(),
        operations = operations.len(),
        "compiled expression"
    );
    Ok(Code::from_operations(operations))
}

#[cfg(test)]
#[path = "../../tests/unit/expression/compile.rs"]
mod tests;
