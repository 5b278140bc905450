use crate::expression::error::{ParseError, RuntimeError, TokenizeError};

/// Convenience result type used across the crate.
pub type ScriptResult<T> = Result<T, ScriptError>;

/// Top-level error taxonomy, one variant per pipeline stage plus configuration.
#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    /// Source text could not be split into tokens.
    #[error("tokenize error: {0}")]
    Tokenize(#[from] TokenizeError),

    /// Tokens did not form an expression.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Compiled code failed while running.
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),

    /// Invalid configuration document.
    #[error("config error: {0}")]
    Config(String),

    /// An expression inside a configured action failed to compile or run.
    #[error("action {index} '{field}': {source}")]
    Action {
        /// Position of the action in the configuration.
        index: usize,
        /// Dotted field path, such as `move.x`.
        field: &'static str,
        /// Underlying failure.
        source: Box<ScriptError>,
    },

    /// Wrapped lower-level error from IO or dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScriptError {
    /// Build a [`ScriptError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Attach the action index and field an error came from.
    pub fn in_action(self, index: usize, field: &'static str) -> Self {
        Self::Action {
            index,
            field,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
