//! The expression pipeline: source text to tokens ([`lexer`]), tokens to an [`ast::Expr`]
//! ([`parser`]), expression to postfix [`bytecode::Code`] ([`compile`]), and code to a number
//! ([`vm`]).

pub mod ast;
pub mod bytecode;
pub mod combinator;
pub mod compile;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod vm;
