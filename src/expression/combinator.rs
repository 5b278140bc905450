//! Backtracking parser combinators over slices of input items.
//!
//! A [`Parser`] maps an input slice to either `(output, remaining)` or a failure. Failures are
//! ordinary `Err` values, which is what lets [`or`] backtrack: every alternative is run against
//! the same input slice, and the errors of losing alternatives are dropped.
//!
//! The error type is a parameter so that grammars can fail with their own errors from inside
//! [`bind`] factories; the primitives only need to build a [`CombinatorError`].

use std::rc::Rc;

use crate::expression::error::CombinatorError;

/// Output of running a parser: the produced value and the unconsumed input.
pub type ParseResult<'a, I, O, E> = Result<(O, &'a [I]), E>;

/// A cloneable handle to a parsing function.
pub struct Parser<I, O, E> {
    run: Rc<dyn for<'a> Fn(&'a [I]) -> ParseResult<'a, I, O, E>>,
}

impl<I, O, E> Clone for Parser<I, O, E> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<I, O, E> Parser<I, O, E> {
    /// Wrap a parsing function.
    pub fn new<F>(f: F) -> Self
    where
        I: 'static,
        O: 'static,
        E: 'static,
        F: for<'a> Fn(&'a [I]) -> ParseResult<'a, I, O, E> + 'static,
    {
        Self { run: Rc::new(f) }
    }

    /// Run the parser against `input`.
    pub fn parse<'a>(&self, input: &'a [I]) -> ParseResult<'a, I, O, E> {
        (self.run)(input)
    }
}

/// Always succeed with `value`, consuming nothing.
pub fn result<I, O, E>(value: O) -> Parser<I, O, E>
where
    I: 'static,
    O: Clone + 'static,
    E: 'static,
{
    Parser::new(move |input| Ok((value.clone(), input)))
}

/// Take the first input item.
pub fn consume<I, E>() -> Parser<I, I, E>
where
    I: Clone + 'static,
    E: From<CombinatorError> + 'static,
{
    Parser::new(|input: &[I]| match input.split_first() {
        Some((first, rest)) => Ok((first.clone(), rest)),
        None => Err(CombinatorError::NoMoreInput.into()),
    })
}

/// Sequence `parser` with the parser `factory` builds from its output.
///
/// The factory may fail with the grammar's own error type; that failure is indistinguishable
/// from any other parse failure as far as [`or`] is concerned.
pub fn bind<I, O, T, E, F>(parser: Parser<I, O, E>, factory: F) -> Parser<I, T, E>
where
    I: 'static,
    O: 'static,
    T: 'static,
    E: 'static,
    F: Fn(O) -> Result<Parser<I, T, E>, E> + 'static,
{
    Parser::new(move |input| {
        let (output, remaining) = parser.parse(input)?;
        let next = factory(output)?;
        next.parse(remaining)
    })
}

/// Run `parser` and keep its output only when `predicate` accepts it.
pub fn satisfy<I, O, E, P>(parser: Parser<I, O, E>, predicate: P) -> Parser<I, O, E>
where
    I: 'static,
    O: Clone + 'static,
    E: From<CombinatorError> + 'static,
    P: Fn(&O) -> bool + 'static,
{
    bind(parser, move |output| {
        if predicate(&output) {
            Ok(result(output))
        } else {
            Err(CombinatorError::NotSatisfied.into())
        }
    })
}

/// Try `parsers` in order against the same input and return the first success.
pub fn or<I, O, E>(parsers: Vec<Parser<I, O, E>>) -> Parser<I, O, E>
where
    I: 'static,
    O: 'static,
    E: From<CombinatorError> + 'static,
{
    Parser::new(move |input| {
        for parser in &parsers {
            if let Ok(parsed) = parser.parse(input) {
                return Ok(parsed);
            }
        }
        Err(CombinatorError::NoParserMatched.into())
    })
}

/// Run list-producing `parsers` one after another and concatenate their outputs.
pub fn seq<I, O, E>(parsers: Vec<Parser<I, Vec<O>, E>>) -> Parser<I, Vec<O>, E>
where
    I: 'static,
    O: 'static,
    E: 'static,
{
    Parser::new(move |input| {
        let mut outputs = Vec::new();
        let mut remaining = input;
        for parser in &parsers {
            let (mut output, rest) = parser.parse(remaining)?;
            outputs.append(&mut output);
            remaining = rest;
        }
        Ok((outputs, remaining))
    })
}

/// Succeed with an empty list.
pub fn zero<I, O, E>() -> Parser<I, Vec<O>, E>
where
    I: 'static,
    O: Clone + 'static,
    E: 'static,
{
    result(Vec::new())
}

/// Run `parser` once, wrapping its output in a list.
pub fn one<I, O, E>(parser: Parser<I, O, E>) -> Parser<I, Vec<O>, E>
where
    I: 'static,
    O: Clone + 'static,
    E: 'static,
{
    bind(parser, |output| Ok(result(vec![output])))
}

/// Run `parser` once if it matches, otherwise succeed with an empty list.
pub fn zero_or_one<I, O, E>(parser: Parser<I, O, E>) -> Parser<I, Vec<O>, E>
where
    I: 'static,
    O: Clone + 'static,
    E: From<CombinatorError> + 'static,
{
    or(vec![one(parser), zero()])
}

/// Run `parser` until it fails; the failing attempt consumes nothing.
pub fn zero_or_more<I, O, E>(parser: Parser<I, O, E>) -> Parser<I, Vec<O>, E>
where
    I: 'static,
    O: 'static,
    E: 'static,
{
    Parser::new(move |input| {
        let mut outputs = Vec::new();
        let mut remaining = input;
        while let Ok((output, rest)) = parser.parse(remaining) {
            outputs.push(output);
            remaining = rest;
        }
        Ok((outputs, remaining))
    })
}

/// Run `parser` at least once and then until it fails.
pub fn one_or_more<I, O, E>(parser: Parser<I, O, E>) -> Parser<I, Vec<O>, E>
where
    I: 'static,
    O: Clone + 'static,
    E: 'static,
{
    let tail = zero_or_more(parser.clone());
    bind(one(parser), move |head: Vec<O>| {
        Ok(bind(tail.clone(), move |rest: Vec<O>| {
            let mut all = head.clone();
            all.extend(rest);
            Ok(result(all))
        }))
    })
}

/// Build the parser only when it runs. Recursive productions go through here so that
/// constructing a grammar terminates.
pub fn lazy<I, O, E, F>(factory: F) -> Parser<I, O, E>
where
    I: 'static,
    O: 'static,
    E: 'static,
    F: Fn() -> Parser<I, O, E> + 'static,
{
    Parser::new(move |input| factory().parse(input))
}

#[cfg(test)]
#[path = "../../tests/unit/expression/combinator.rs"]
mod tests;
