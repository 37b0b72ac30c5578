//! Bisection method

use log::{debug, trace};

use super::algorithms::Method;
use super::config::SolverCfg;
use super::errors::{PreconditionError, RootFindingError};
use super::report::{BracketRecord, IterationSequence};
use super::signs::{opposite_sign, same_sign};
use super::tolerances;
use crate::expression::EvaluationError;

const ALGORITHM: &str = Method::Bisection.algorithm_name();


/// Calculates midpoint of [a, b]
#[inline]
fn midpoint(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}


/// Evaluates both endpoints and checks the bracket precondition.
///
/// # Returns
/// ├ Ok((f(a), f(b))) if `f(a) * f(b) <= 0`
/// └ Err(PreconditionError::NoSignChange) if `f(a) * f(b) > 0`
pub(crate) fn checked_bracket<F>(
    func: &mut F,
    a: f64,
    b: f64,
) -> Result<(f64, f64), RootFindingError>
where F: FnMut(f64) -> Result<f64, EvaluationError> {
    let fa = func(a)?;
    let fb = func(b)?;
    if same_sign(fa, fb) {
        return Err(PreconditionError::NoSignChange { a, b, fa, fb }.into());
    }
    Ok((fa, fb))
}


/// Finds a root of a function using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found; any evaluation failure aborts the run.
/// ├ `a`    - Left end of the bracket.
/// ├ `b`    - Right end of the bracket.
/// └ `cfg`  - [`SolverCfg`] with `tol` and `max_iter`.
///
/// # Returns
///
/// An [`IterationSequence`] of [`BracketRecord`]s `{iter, a, b, x, f(x), erro}`
/// where `a`, `b` is the bracket the midpoint `x` was taken from and `erro` is
/// the distance to the previous midpoint (NaN on iteration 1).
///
/// # Errors
///
/// ┌ [`PreconditionError::NoSignChange`] - `f(a) * f(b) > 0`.
/// └ [`RootFindingError::Evaluation`]    - `func` failed at some point.
///
/// # Behavior
/// - Stops after recording an iteration where `|f(x)| < tol` or `erro < tol`.
/// - Otherwise keeps the half whose endpoints still bracket a sign change:
///   `f(a) * f(x) < 0` sets `b = x`, anything else sets `a = x`.
/// - Reaching `max_iter` returns the trace with
///   [`TerminationReason::IterationLimit`](super::report::TerminationReason).
pub fn bisection<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<IterationSequence<BracketRecord>, RootFindingError>
where F: FnMut(f64) -> Result<f64, EvaluationError> {
    let tol = cfg.tol();
    let (mut fa, _) = checked_bracket(&mut func, a, b)?;

    let mut rows = IterationSequence::with_capacity(cfg.max_iter());
    let mut x_prev: Option<f64> = None;

    for iter in 1..=cfg.max_iter() {
        let c  = midpoint(a, b);
        let fc = func(c)?;
        let erro = x_prev.map_or(f64::NAN, |p| (c - p).abs());

        trace!("{ALGORITHM} iter={iter} a={a} b={b} x={c} f(x)={fc} erro={erro}");
        rows.push(BracketRecord { iter, a, b, x: c, fx: fc, erro });

        if let Some(reached) = tolerances::check(Some(fc), erro, tol) {
            debug!("{ALGORITHM} converged after {iter} iterations: x={c} ({reached:?})");
            return Ok(rows.converged(reached));
        }

        // shrink bracket
        if opposite_sign(fa, fc) {
            b = c;
        } else {
            a  = c;
            fa = fc;
        }
        x_prev = Some(c);
    }

    debug!("{ALGORITHM} hit max_iter={} without convergence", cfg.max_iter());
    Ok(rows)
}
