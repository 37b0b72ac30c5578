//! Classical single-variable root finding with per-iteration traces.
//!
//! ┌ [`root_finding`] : bisection, regula falsi, fixed point, newton, secant
//! ├ [`expression`]   : sandboxed parsing and evaluation of `f(x)` text
//! ├ [`input`]        : `key=value` input files
//! ├ [`runner`]       : runs every applicable method on a problem
//! └ [`report`]       : text tables and consolidated CSV
//!
//! ```
//! use rootlab::expression::Expression;
//! use rootlab::root_finding::{bisection::bisection, SolverCfg};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let f   = Expression::parse("x^2 - 2")?;
//! let seq = bisection(f.as_fn(), 0.0, 2.0, SolverCfg::new())?;
//! assert!(seq.is_converged());
//! assert!((seq.root().unwrap_or(0.0) - 2.0_f64.sqrt()).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

pub mod expression;
pub mod input;
pub mod report;
pub mod root_finding;
pub mod runner;
