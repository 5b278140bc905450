use serde::{Deserialize, Serialize};

/// Arithmetic expression tree. Every child is owned by exactly one parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// A variable, resolved by the environment at run time.
    Symbol(String),
    Number(f64),
    Add(Box<Expr>, Box<Expr>),
    Subtract(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    Divide(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    pub fn add(left: Expr, right: Expr) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    pub fn subtract(left: Expr, right: Expr) -> Self {
        Self::Subtract(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: Expr, right: Expr) -> Self {
        Self::Multiply(Box::new(left), Box::new(right))
    }

    pub fn divide(left: Expr, right: Expr) -> Self {
        Self::Divide(Box::new(left), Box::new(right))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Symbol(_) | Self::Number(_) => 1,
            Self::Add(l, r) | Self::Subtract(l, r) | Self::Multiply(l, r) | Self::Divide(l, r) => {
                1 + l.depth().max(r.depth())
            }
        }
    }
}
