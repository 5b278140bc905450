use serde::{Deserialize, Serialize};

use crate::expression::combinator::{
    Parser, bind, consume, lazy, one, one_or_more, or, result, satisfy, seq, zero_or_more,
    zero_or_one,
};
use crate::expression::error::TokenizeError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Token {
    /// Identifier, possibly dotted: `screen.width`.
    Name(String),
    Number(f64),
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Multiply,
    Divide,
}

type CharParser<O> = Parser<char, O, TokenizeError>;

/// Split `source` into tokens.
///
/// Whitespace is skipped before each token, not after the last one, so trailing whitespace is
/// reported as unconsumed input.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let chars: Vec<char> = source.chars().collect();
    let (tokens, remaining) = zero_or_more(token()).parse(&chars)?;

    if tokens.is_empty() && remaining.iter().all(|c| c.is_whitespace()) {
        return Err(TokenizeError::Empty);
    }
    if !remaining.is_empty() {
        return Err(TokenizeError::Incomplete {
            remaining: remaining.iter().collect(),
        });
    }

    tracing::trace!(count = tokens.len(), "tokenized");
    Ok(tokens)
}

fn token() -> CharParser<Token> {
    or(vec![
        skip_whitespace(punctuation('(', Token::LeftParen)),
        skip_whitespace(punctuation(')', Token::RightParen)),
        skip_whitespace(number_token()),
        skip_whitespace(name_token()),
        skip_whitespace(punctuation('+', Token::Plus)),
        skip_whitespace(punctuation('-', Token::Minus)),
        skip_whitespace(punctuation('*', Token::Multiply)),
        skip_whitespace(punctuation('/', Token::Divide)),
    ])
}

fn skip_whitespace<O: 'static>(parser: CharParser<O>) -> CharParser<O> {
    bind(zero_or_more(char_where(char::is_whitespace)), move |_| {
        Ok(parser.clone())
    })
}

fn char_where(predicate: impl Fn(char) -> bool + 'static) -> CharParser<char> {
    satisfy(consume(), move |c: &char| predicate(*c))
}

fn char_in(set: &'static str) -> CharParser<char> {
    char_where(move |c| set.contains(c))
}

fn digit() -> CharParser<char> {
    char_where(|c| c.is_ascii_digit())
}

fn punctuation(symbol: char, token: Token) -> CharParser<Token> {
    bind(char_where(move |c| c == symbol), move |_| {
        Ok(result(token.clone()))
    })
}

// Numbers

fn integer_part() -> CharParser<Vec<char>> {
    or(vec![
        seq(vec![
            zero_or_one(char_in("-")),
            one(char_in("123456789")),
            zero_or_more(digit()),
        ]),
        seq(vec![zero_or_one(char_in("-")), one(char_in("0"))]),
    ])
}

fn fraction_part() -> CharParser<Vec<char>> {
    seq(vec![one(char_in(".")), one_or_more(digit())])
}

fn exponent_part() -> CharParser<Vec<char>> {
    seq(vec![
        one(char_in("eE")),
        zero_or_one(char_in("+-")),
        one_or_more(digit()),
    ])
}

fn number() -> CharParser<Vec<char>> {
    // Longest shape first: `or` commits to the first alternative that matches.
    or(vec![
        seq(vec![integer_part(), fraction_part(), exponent_part()]),
        seq(vec![integer_part(), fraction_part()]),
        seq(vec![integer_part(), exponent_part()]),
        integer_part(),
    ])
}

fn number_token() -> CharParser<Token> {
    bind(number(), |chars: Vec<char>| {
        let text: String = chars.into_iter().collect();
        match text.parse::<f64>() {
            Ok(value) => Ok(result(Token::Number(value))),
            Err(_) => Err(TokenizeError::InvalidNumber(text)),
        }
    })
}

// Names

fn name_part() -> CharParser<Vec<char>> {
    seq(vec![
        one(char_where(|c| c.is_ascii_alphabetic() || c == '_')),
        zero_or_more(char_where(|c| c.is_ascii_alphanumeric() || c == '_')),
    ])
}

fn name() -> CharParser<Vec<char>> {
    let dotted = bind(name_part(), |head: Vec<char>| {
        Ok(bind(one(char_in(".")), move |dot: Vec<char>| {
            let head = head.clone();
            Ok(bind(lazy(name), move |tail: Vec<char>| {
                Ok(result([head.as_slice(), dot.as_slice(), tail.as_slice()].concat()))
            }))
        }))
    });
    or(vec![dotted, name_part()])
}

fn name_token() -> CharParser<Token> {
    bind(name(), |chars: Vec<char>| {
        Ok(result(Token::Name(chars.into_iter().collect())))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/expression/lexer.rs"]
mod tests;
