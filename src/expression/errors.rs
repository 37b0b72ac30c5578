//! Expression error types.
//!
//! ┌ [`ParseError`]      : the text is not a valid expression
//! │   ├ unexpected character / token / end of input
//! │   ├ malformed number literal
//! │   ├ identifier outside the allow-list
//! │   └ wrong number of function arguments
//! │
//! └ [`EvaluationError`] : a valid expression has no finite value at `x`
//!     ├ division by zero
//!     ├ function domain error (NaN result)
//!     └ overflow / other non-finite result

use thiserror::Error;


/// Syntax-level failure, reported with the byte offset where it occurred.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid expression '{source_text}': {kind} at position {position}")]
pub struct ParseError {
    pub source_text : String,
    pub position    : usize,
    pub kind        : ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("'{name}' expects {expected} argument(s), got {got}")]
    Arity { name: &'static str, expected: &'static str, got: usize },

    #[error("'{0}' is a function and must be called")]
    BareFunction(&'static str),
}


/// Why an expression could not produce a finite value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvalFailure {
    #[error("division by zero")]
    DivisionByZero,

    #[error("math domain error in {function}")]
    Domain { function: &'static str },

    #[error("result is not finite ({value})")]
    NonFinite { value: f64 },
}


/// An expression failed to evaluate at a given point.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to evaluate '{expression}' at x={x}: {cause}")]
pub struct EvaluationError {
    pub expression : String,
    pub x          : f64,
    pub cause      : EvalFailure,
}
