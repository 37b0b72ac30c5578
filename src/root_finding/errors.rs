//! Root-finding error types.
//!
//! ┌ [`RootFindingError`]  : everything a solver call can return
//! │   ├ [`PreconditionError`] : bracket has no sign change
//! │   ├ [`NumericError`]      : intrinsic singularity during an update
//! │   ├ [`EvaluationError`]   : the function could not be evaluated
//! │   ├ [`ToleranceError`]    : invalid `tol`
//! │   └ invalid `max_iter`
//! │
//! └ [`ToleranceError`]    : tolerance validation (config setters)
//!
//! Non-convergence within `max_iter` is *not* an error; see
//! [`TerminationReason::IterationLimit`](super::report::TerminationReason).

use thiserror::Error;
use crate::expression::EvaluationError;


/// Bracket-based methods require `f(a) * f(b) <= 0`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreconditionError {
    #[error("opposite-sign requirement not met on [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}


/// Singularities hit while computing the next estimate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("zero derivative at x={x}")]
    ZeroDerivative { x: f64 },

    #[error("zero denominator: f(x_k) == f(x_(k-1)) for x_(k-1)={x_prev}, x_k={x}")]
    ZeroDenominator { x_prev: f64, x: f64 },

    #[error("flat secant on [{a}, {b}]: f(a) == f(b)")]
    FlatBracket { a: f64, b: f64 },
}


/// Tolerance configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToleranceError {
    #[error("invalid `tol`: must be finite and > 0. got {got}")]
    InvalidTol { got: f64 },
}


/// Common error type for all root-finding algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
