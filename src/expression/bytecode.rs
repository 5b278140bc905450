use serde::{Deserialize, Serialize};

use crate::foundation::error::ScriptResult;

/// A runtime stack value. Variables stay symbolic until an operation consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Variable(String),
    Value(f64),
}

/// One postfix instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Push(Operand),
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Compiled, immutable instruction sequence.
///
/// `Code` carries no environment: the same value can be run any number of times, from any
/// thread, against different [`Environment`](crate::expression::vm::Environment)s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code {
    operations: Vec<Operation>,
}

impl Code {
    /// Tokenize, parse and compile `source`.
    pub fn compile(source: &str) -> ScriptResult<Self> {
        crate::expression::compile::compile_source(source)
    }

    /// Wrap an existing instruction sequence without checking it.
    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Variable names in push order, including repeats.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            Operation::Push(Operand::Variable(name)) => Some(name.as_str()),
            _ => None,
        })
    }
}
