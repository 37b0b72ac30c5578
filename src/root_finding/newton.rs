//! Newton-Raphson method

use log::{debug, trace};

use super::algorithms::Method;
use super::config::SolverCfg;
use super::errors::{NumericError, RootFindingError};
use super::report::{IterationSequence, NewtonRecord};
use super::tolerances;
use crate::expression::EvaluationError;

const ALGORITHM: &str = Method::Newton.algorithm_name();


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method)
/// with an analytic derivative.
///
/// # Arguments
/// - `func`  : function whose root is sought
/// - `dfunc` : its derivative
/// - `x0`    : initial guess
/// - `cfg`   : [`SolverCfg`] with `tol` and `max_iter`
///
/// # Returns
/// [`IterationSequence`] of [`NewtonRecord`]s `{iter, x, f(x), f'(x), erro}`.
/// `x` is the *updated* estimate while `f(x)` and `f'(x)` are the values at
/// the estimate the step was taken from.
///
/// # Errors
/// - [`NumericError::ZeroDerivative`] : `f'(x) == 0` exactly at some iterate
/// - [`RootFindingError::Evaluation`] : `func` or `dfunc` failed
///
/// # Behavior
/// - `x_new = x - f(x) / f'(x)`, `erro = |x_new - x|`
/// - The update is committed, then the run stops if `|f(x)| < tol` (residual
///   at the *old* estimate) or `erro < tol` (the *new* step). This order
///   decides iteration counts near convergence and is kept as is.
///
/// # Notes
/// - Convergence is local and depends on a good `x0`; poor guesses can diverge
///   or cycle until `max_iter`.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<IterationSequence<NewtonRecord>, RootFindingError>
where
    F: FnMut(f64) -> Result<f64, EvaluationError>,
    G: FnMut(f64) -> Result<f64, EvaluationError>,
{
    let tol = cfg.tol();
    let mut rows = IterationSequence::with_capacity(cfg.max_iter());
    let mut x = x0;

    for iter in 1..=cfg.max_iter() {
        let fx  = func(x)?;
        let dfx = dfunc(x)?;
        if dfx == 0.0 {
            return Err(NumericError::ZeroDerivative { x }.into());
        }

        let x_new = x - fx / dfx;
        let erro  = (x_new - x).abs();

        trace!("{ALGORITHM} iter={iter} x={x_new} f(x)={fx} f'(x)={dfx} erro={erro}");
        rows.push(NewtonRecord { iter, x: x_new, fx, dfx, erro });

        x = x_new;
        if let Some(reached) = tolerances::check(Some(fx), erro, tol) {
            debug!("{ALGORITHM} converged after {iter} iterations: x={x} ({reached:?})");
            return Ok(rows.converged(reached));
        }
    }

    debug!("{ALGORITHM} hit max_iter={} without convergence", cfg.max_iter());
    Ok(rows)
}
