use log::{debug, trace};

use super::algorithms::Method;
use super::config::SolverCfg;
use super::errors::{NumericError, RootFindingError};
use super::report::{IterationSequence, SecantRecord};
use super::tolerances;
use crate::expression::EvaluationError;

const ALGORITHM: &str = Method::Secant.algorithm_name();


/// Calculates the secant x-intercept for the line
/// connecting `(x_prev, f_prev)` and `(x, fx)`
///
/// # Returns
/// - `Ok(x_next)` with `x_next = x - fx * (x - x_prev) / (fx - f_prev)`
/// - `Err(NumericError::ZeroDenominator)` if `fx == f_prev` exactly
#[inline]
pub(crate) fn secant_step(
    (x_prev, f_prev): (f64, f64),
    (x, fx): (f64, f64),
) -> Result<f64, NumericError> {
    let denom = fx - f_prev;
    if denom == 0.0 {
        return Err(NumericError::ZeroDenominator { x_prev, x });
    }
    Ok(x - fx * (x - x_prev) / denom)
}


/// Finds a root of a function using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// # Arguments
/// - `func` : The function whose root is to be found
/// - `x0`   : First initial guess, x_{k-1} of the first iteration
/// - `x1`   : Second initial guess, x_k of the first iteration
/// - `cfg`  : [`SolverCfg`] with `tol` and `max_iter`
///
/// # Returns
/// [`IterationSequence`] of [`SecantRecord`]s
/// `{iter, x_{k-1}, x_k, x_{k+1}, f(x_k), erro}` with `erro = |x_{k+1} - x_k|`.
///
/// # Errors
/// - [`NumericError::ZeroDenominator`] : two consecutive f-values are equal,
///   which includes `x0 == x1`
/// - [`RootFindingError::Evaluation`]  : `func` failed
///
/// # Behavior
/// - The run stops once `|f(x_k)| < tol` or `erro < tol`, with `x_{k+1}` as
///   the final estimate. Note the residual tested belongs to `x_k`, not to the
///   new estimate, which is never evaluated on the last iteration.
/// - Otherwise `(x_{k-1}, x_k) ← (x_k, x_{k+1})` and `f(x_{k+1})` is evaluated.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SolverCfg,
) -> Result<IterationSequence<SecantRecord>, RootFindingError>
where F: FnMut(f64) -> Result<f64, EvaluationError> {
    let tol = cfg.tol();
    let mut rows = IterationSequence::with_capacity(cfg.max_iter());

    let (mut x_prev, mut x) = (x0, x1);
    let mut f_prev = func(x_prev)?;
    let mut fx     = func(x)?;

    for iter in 1..=cfg.max_iter() {
        let x_next = secant_step((x_prev, f_prev), (x, fx))?;
        let erro   = (x_next - x).abs();

        trace!("{ALGORITHM} iter={iter} x_(k-1)={x_prev} x_k={x} x_(k+1)={x_next} f(x_k)={fx} erro={erro}");
        rows.push(SecantRecord { iter, x_prev, x, x_next, fx, erro });

        if let Some(reached) = tolerances::check(Some(fx), erro, tol) {
            debug!("{ALGORITHM} converged after {iter} iterations: x={x_next} ({reached:?})");
            return Ok(rows.converged(reached));
        }

        (x_prev, f_prev) = (x, fx);
        x  = x_next;
        fx = func(x)?;
    }

    debug!("{ALGORITHM} hit max_iter={} without convergence", cfg.max_iter());
    Ok(rows)
}
