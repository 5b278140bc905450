use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::expression::bytecode::{Code, Operand, Operation};
use crate::expression::error::RuntimeError;

/// Resolves variable names to numbers for one run.
///
/// The runtime asks once per variable occurrence in the code and never caches answers, so an
/// environment backed by live state sees every lookup.
pub trait Environment {
    fn resolve(&self, name: &str) -> Option<f64>;
}

impl<F> Environment for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn resolve(&self, name: &str) -> Option<f64> {
        self(name)
    }
}

impl<S: BuildHasher> Environment for HashMap<String, f64, S> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Environment for BTreeMap<String, f64> {
    fn resolve(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

/// Binds an [`Environment`] to the code it runs.
#[derive(Debug, Clone)]
pub struct Runtime<E> {
    environment: E,
}

impl<E: Environment> Runtime<E> {
    pub fn new(environment: E) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Execute `code`. A failed run leaves `code` untouched and reusable.
    pub fn run(&self, code: &Code) -> Result<Option<f64>, RuntimeError> {
        evaluate(code.operations(), &self.environment)
    }
}

/// Execute postfix `operations` against `environment`.
///
/// Returns `None` when the program leaves nothing on the stack.
pub fn evaluate<E>(operations: &[Operation], environment: &E) -> Result<Option<f64>, RuntimeError>
where
    E: Environment + ?Sized,
{
    let mut stack: Vec<Operand> = Vec::with_capacity(16);

    for operation in operations {
        match operation {
            Operation::Push(operand) => stack.push(operand.clone()),
            Operation::Add => binary(&mut stack, environment, |a, b| a + b)?,
            Operation::Subtract => binary(&mut stack, environment, |a, b| a - b)?,
            Operation::Multiply => binary(&mut stack, environment, |a, b| a * b)?,
            Operation::Divide => binary(&mut stack, environment, |a, b| a / b)?,
        }
    }

    if stack.len() > 1 {
        tracing::warn!(
            operands = stack.len(),
            "code left more than one operand, using the last"
        );
    }
    stack
        .pop()
        .map(|operand| resolve(&operand, environment))
        .transpose()
}

fn binary<E>(
    stack: &mut Vec<Operand>,
    environment: &E,
    f: impl FnOnce(f64, f64) -> f64,
) -> Result<(), RuntimeError>
where
    E: Environment + ?Sized,
{
    let right = pop(stack)?;
    let left = pop(stack)?;
    let right = resolve(&right, environment)?;
    let left = resolve(&left, environment)?;
    stack.push(Operand::Value(f(left, right)));
    Ok(())
}

fn pop(stack: &mut Vec<Operand>) -> Result<Operand, RuntimeError> {
    stack.pop().ok_or(RuntimeError::StackUnderflow)
}

fn resolve<E>(operand: &Operand, environment: &E) -> Result<f64, RuntimeError>
where
    E: Environment + ?Sized,
{
    match operand {
        Operand::Value(value) => Ok(*value),
        Operand::Variable(name) => environment
            .resolve(name)
            .ok_or_else(|| RuntimeError::NoVariableFound(name.clone())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expression/vm.rs"]
mod tests;
