use crate::expression::lexer::Token;

/// Failures reported by the combinator primitives themselves.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinatorError {
    /// `consume` was run on an exhausted input.
    #[error("no more input")]
    NoMoreInput,

    /// `satisfy` rejected the output of its inner parser.
    #[error("predicate not satisfied")]
    NotSatisfied,

    /// Every alternative of an `or` failed.
    #[error("no parser matched")]
    NoParserMatched,
}

/// Errors produced while turning source text into tokens.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TokenizeError {
    /// A combinator failure that escaped the tokenizer grammar.
    #[error(transparent)]
    Combinator(#[from] CombinatorError),

    /// Number-shaped text that does not parse as an `f64`.
    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    /// Input left over after the last token that could be produced.
    #[error("could not tokenize '{remaining}'")]
    Incomplete {
        /// Unconsumed source text, starting at the first position no token matched.
        remaining: String,
    },

    /// The source contained no tokens at all.
    #[error("source is empty")]
    Empty,
}

/// Errors produced while turning tokens into an expression tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A combinator failure that escaped the grammar.
    #[error(transparent)]
    Combinator(#[from] CombinatorError),

    /// A value position held something other than a name or a number.
    #[error("expected a value token, found {0:?}")]
    NotValueToken(Token),

    /// Tokens left over after a complete expression.
    #[error("could not fully parse, {} token(s) remaining starting at {:?}", .remaining.len(), .remaining.first())]
    Incomplete {
        /// Unconsumed tokens.
        remaining: Vec<Token>,
    },
}

/// Errors raised while executing compiled code.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// An operation needed more operands than the stack held.
    #[error("stack underflow")]
    StackUnderflow,

    /// The environment could not resolve a variable.
    #[error("no variable found for '{0}'")]
    NoVariableFound(String),
}
