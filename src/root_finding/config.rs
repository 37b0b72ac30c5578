//! Shared configuration for root-finding algorithms.
//!
//! [`SolverCfg`] — universal fields
//! ├ `tol`      : threshold for both |f(x)| and the step size |Δx|
//! └ `max_iter` : hard iteration cap
//!
//! Method-specific inputs (bracket, initial guesses) are passed to each
//! solver directly.

use super::errors::{RootFindingError, ToleranceError};


pub const DEFAULT_TOL      : f64   = 1e-6;
pub const DEFAULT_MAX_ITER : usize = 100;


/// Solver configuration.
///
/// # Construction
/// - [`SolverCfg::new`] gives the defaults, then chain the validated setters:
///
/// ```
/// # use rootlab::root_finding::config::SolverCfg;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let cfg = SolverCfg::new().set_tol(1e-8)?.set_max_iter(50)?;
/// assert_eq!(cfg.max_iter(), 50);
/// # Ok(())
/// # }
/// ```
///
/// # Validation
/// ├ `tol`      > 0 and finite
/// └ `max_iter` >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolverCfg {
    tol      : f64,
    max_iter : usize,
}

impl SolverCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[inline] #[must_use] pub fn tol(&self)      -> f64   { self.tol }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    pub fn set_tol(mut self, v: f64) -> Result<Self, ToleranceError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ToleranceError::InvalidTol { got: v });
        }
        self.tol = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
}

impl Default for SolverCfg {
    fn default() -> Self {
        Self { tol: DEFAULT_TOL, max_iter: DEFAULT_MAX_ITER }
    }
}
