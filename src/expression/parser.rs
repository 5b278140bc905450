//! Recursive-descent grammar over tokens:
//!
//! ```text
//! expression = term ("+" | "-") expression | term
//! term       = factor ("*" | "/") term | factor
//! factor     = "(" expression ")" | name | number
//! ```
//!
//! The right operand recurses into the same production, so both precedence tiers associate to
//! the right: `1 - 2 - 3` is `1 - (2 - 3)`.

use crate::expression::ast::Expr;
use crate::expression::combinator::{Parser, bind, consume, lazy, or, result, satisfy};
use crate::expression::error::{CombinatorError, ParseError};
use crate::expression::lexer::Token;

type TokenParser<O> = Parser<Token, O, ParseError>;

/// Builds the node for a matched binary operator.
type Combine = fn(Expr, Expr) -> Expr;

/// Parse a complete token sequence into a single expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    let (expr, remaining) = expression().parse(tokens)?;
    if !remaining.is_empty() {
        return Err(ParseError::Incomplete {
            remaining: remaining.to_vec(),
        });
    }
    Ok(expr)
}

fn expression() -> TokenParser<Expr> {
    let operators = or(vec![
        operator(Token::Plus, Expr::add),
        operator(Token::Minus, Expr::subtract),
    ]);
    chain(term(), operators, expression)
}

fn term() -> TokenParser<Expr> {
    let operators = or(vec![
        operator(Token::Multiply, Expr::multiply),
        operator(Token::Divide, Expr::divide),
    ]);
    chain(factor(), operators, term)
}

fn factor() -> TokenParser<Expr> {
    or(vec![group(), value()])
}

fn group() -> TokenParser<Expr> {
    let open = exactly(Token::LeftParen);
    let inner = lazy(expression);
    let close = exactly(Token::RightParen);
    Parser::new(move |input: &[Token]| {
        let (_, rest) = open.parse(input)?;
        let (expr, rest) = inner.parse(rest)?;
        let (_, rest) = close.parse(rest)?;
        Ok((expr, rest))
    })
}

fn value() -> TokenParser<Expr> {
    bind(consume(), |token: Token| match token {
        Token::Name(name) => Ok(result(Expr::Symbol(name))),
        Token::Number(value) => Ok(result(Expr::Number(value))),
        other => Err(ParseError::NotValueToken(other)),
    })
}

/// `left op right | left`, where `right` is built lazily because it names the enclosing
/// production.
///
/// The left operand is parsed once; when no operator and right operand follow it, the parse
/// falls back to the left operand alone, consuming nothing after it.
fn chain(
    left: TokenParser<Expr>,
    operators: TokenParser<Combine>,
    right: fn() -> TokenParser<Expr>,
) -> TokenParser<Expr> {
    let right = lazy(right);
    Parser::new(move |input: &[Token]| {
        let (lhs, after_lhs) = left
            .parse(input)
            .map_err(|_| ParseError::from(CombinatorError::NoParserMatched))?;
        let Ok((combine, after_operator)) = operators.parse(after_lhs) else {
            return Ok((lhs, after_lhs));
        };
        match right.parse(after_operator) {
            Ok((rhs, rest)) => Ok((combine(lhs, rhs), rest)),
            Err(_) => Ok((lhs, after_lhs)),
        }
    })
}

fn operator(expected: Token, combine: Combine) -> TokenParser<Combine> {
    bind(exactly(expected), move |_| Ok(result(combine)))
}

fn exactly(expected: Token) -> TokenParser<Token> {
    satisfy(consume(), move |token: &Token| *token == expected)
}

#[cfg(test)]
#[path = "../../tests/unit/expression/parser.rs"]
mod tests;
