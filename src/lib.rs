//! A small arithmetic expression language for window placement.
//!
//! Sources such as `screen.width - (screen.width * 0.125) * 2` are compiled once into a
//! [`Code`] and then run on every key press against an [`Environment`] that resolves names
//! like `screen.width` from live geometry.
//!
//! ```
//! use alignscript::{Code, Runtime};
//! use std::collections::HashMap;
//!
//! let code = Code::compile("screen.width * 0.5").unwrap();
//! let env = HashMap::from([("screen.width".to_string(), 1440.0)]);
//! assert_eq!(Runtime::new(env).run(&code).unwrap(), Some(720.0));
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod expression;
pub mod foundation;

pub use crate::config::action::{Action, MoveCode, Placement, ResizeCode, compile_actions};
pub use crate::config::{ActionConfig, Config, HotKeyConfig, Modifier, MoveConfig, ResizeConfig};
pub use crate::expression::ast::Expr;
pub use crate::expression::bytecode::{Code, Operand, Operation};
pub use crate::expression::compile::compile;
pub use crate::expression::error::{CombinatorError, ParseError, RuntimeError, TokenizeError};
pub use crate::expression::lexer::{Token, tokenize};
pub use crate::expression::parser::parse;
pub use crate::expression::vm::{Environment, Runtime, evaluate};
pub use crate::foundation::core::{GEOMETRY_VARIABLES, Geometry, Point, Rect, Size};
pub use crate::foundation::error::{ScriptError, ScriptResult};
