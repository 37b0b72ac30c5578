//! Sandboxed evaluation of user-supplied formulas.
//!
//! Text is tokenized, parsed into a [`Node`] tree by a recursive-descent
//! parser and evaluated with the single free variable `x` bound. Only the
//! constants and functions in the allow-list of [`Builtin`] resolve.
//!
//! ```
//! use rootlab::expression::Expression;
//!
//! let f = Expression::parse("x^2 - 2").unwrap();
//! assert_eq!(f.eval(3.0).unwrap(), 7.0);
//! ```

pub mod errors;
pub(crate) mod lexer;
pub(crate) mod builtins;
pub mod parser;
pub mod eval;

pub use builtins::Builtin;
pub use errors::{EvalFailure, EvaluationError, ParseError, ParseErrorKind};
pub use eval::Expression;
pub use parser::{BinaryOp, Node};
