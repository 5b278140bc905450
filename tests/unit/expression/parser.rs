use super::*;

fn parse_src(src: &str) -> Result<Expr, ParseError> {
    parse(&crate::expression::lexer::tokenize(src).unwrap())
}

fn n(v: f64) -> Expr {
    Expr::Number(v)
}

fn s(name: &str) -> Expr {
    Expr::symbol(name)
}

#[test]
fn parses_precedence() {
    let tokens = vec![
        Token::Name("cat".to_owned()),
        Token::Plus,
        Token::Number(1.0),
        Token::Multiply,
        Token::Number(2.0),
    ];
    assert_eq!(
        parse(&tokens).unwrap(),
        Expr::add(s("cat"), Expr::multiply(n(1.0), n(2.0)))
    );
}

#[test]
fn single_values() {
    assert_eq!(parse_src("screen.width").unwrap(), s("screen.width"));
    assert_eq!(parse_src("-0.5").unwrap(), n(-0.5));
    assert_eq!(parse_src("((cat))").unwrap(), s("cat"));
}

#[test]
fn subtraction_is_right_associative() {
    assert_eq!(
        parse_src("1 - 2 - 3").unwrap(),
        Expr::subtract(n(1.0), Expr::subtract(n(2.0), n(3.0)))
    );
}

#[test]
fn division_is_right_associative() {
    assert_eq!(
        parse_src("8 / 4 / 2").unwrap(),
        Expr::divide(n(8.0), Expr::divide(n(4.0), n(2.0)))
    );
}

#[test]
fn mixed_tiers_nest_multiplication_inside_addition() {
    assert_eq!(
        parse_src("a + b * c - d").unwrap(),
        Expr::add(
            s("a"),
            Expr::subtract(Expr::multiply(s("b"), s("c")), s("d"))
        )
    );
    assert_eq!(
        parse_src("a * b + c").unwrap(),
        Expr::add(Expr::multiply(s("a"), s("b")), s("c"))
    );
}

#[test]
fn parentheses_override_grouping() {
    assert_eq!(
        parse_src("(1 + 2) * 3").unwrap(),
        Expr::multiply(Expr::add(n(1.0), n(2.0)), n(3.0))
    );
    assert_eq!(
        parse_src("(1 - 2) - 3").unwrap(),
        Expr::subtract(Expr::subtract(n(1.0), n(2.0)), n(3.0))
    );
}

#[test]
fn dangling_operator_is_an_incomplete_parse() {
    assert_eq!(
        parse_src("1 +").unwrap_err(),
        ParseError::Incomplete {
            remaining: vec![Token::Plus]
        }
    );
}

#[test]
fn adjacent_values_are_an_incomplete_parse() {
    assert_eq!(
        parse_src("1 2").unwrap_err(),
        ParseError::Incomplete {
            remaining: vec![Token::Number(2.0)]
        }
    );
    // `-2` is lexed as a literal, leaving two adjacent values.
    assert_eq!(
        parse_src("1 -2").unwrap_err(),
        ParseError::Incomplete {
            remaining: vec![Token::Number(-2.0)]
        }
    );
    assert_eq!(
        parse_src("1)").unwrap_err(),
        ParseError::Incomplete {
            remaining: vec![Token::RightParen]
        }
    );
}

#[test]
fn missing_value_matches_no_alternative() {
    for tokens in [
        vec![],
        vec![Token::LeftParen, Token::RightParen],
        vec![Token::LeftParen, Token::Number(1.0)],
        vec![Token::Multiply, Token::Number(1.0)],
    ] {
        assert_eq!(
            parse(&tokens).unwrap_err(),
            ParseError::Combinator(crate::expression::error::CombinatorError::NoParserMatched),
            "{tokens:?}"
        );
    }
}

#[test]
fn value_rejects_operator_tokens() {
    assert_eq!(
        value().parse(&[Token::Plus]).unwrap_err(),
        ParseError::NotValueToken(Token::Plus)
    );
}

#[test]
fn depth_is_bounded_by_token_count() {
    let tokens = crate::expression::lexer::tokenize("1 + 2 * (3 - a) / b").unwrap();
    let expr = parse(&tokens).unwrap();
    assert!(expr.depth() <= tokens.len());
    assert_eq!(expr.depth(), 5);
}

#[test]
fn deeply_parenthesized_value_parses() {
    let depth = 24;
    let src = format!("{}screen.width{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parse_src(&src).unwrap(), s("screen.width"));
}

#[test]
fn parenthesized_operands_at_every_level_keep_their_grouping() {
    let src = format!("{}1{}", "(1 - ".repeat(20), ")".repeat(20));
    let expected = (0..20).fold(n(1.0), |inner, _| Expr::subtract(n(1.0), inner));
    assert_eq!(parse_src(&src).unwrap(), expected);
}

#[test]
fn long_operator_chain_nests_to_the_right() {
    let count = 200;
    let src = vec!["1"; count + 1].join(" + ");
    let expr = parse_src(&src).unwrap();
    assert_eq!(expr.depth(), count + 1);
    let Expr::Add(left, _) = expr else {
        panic!("expected an addition at the root");
    };
    assert_eq!(*left, n(1.0));
}
