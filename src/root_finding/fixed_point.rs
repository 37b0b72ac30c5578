//! Fixed-point (linear iterative) method

use log::{debug, trace};

use super::algorithms::Method;
use super::config::SolverCfg;
use super::errors::RootFindingError;
use super::report::{FixedPointRecord, IterationSequence, ToleranceSatisfied};
use super::tolerances;
use crate::expression::EvaluationError;

const ALGORITHM: &str = Method::FixedPoint.algorithm_name();


/// Finds a fixed point `x = g(x)` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration).
///
/// # Arguments
/// - `g`   : iteration function
/// - `x0`  : initial guess
/// - `cfg` : [`SolverCfg`] with `tol` and `max_iter`
///
/// # Returns
/// [`IterationSequence`] of [`FixedPointRecord`]s `{iter, x, g(x_prev), erro}`
/// with `x = g(x_prev)` and `erro = |x - x_prev|`.
///
/// # Errors
/// - [`RootFindingError::Evaluation`] : `g` failed, including when the iterates
///   overflow to a non-finite value
///
/// # Notes
/// - Only the step criterion applies; there is no residual to test.
/// - Convergence needs |g'| < 1 near the fixed point. Divergent iterations run
///   until `max_iter` (or until `g` stops producing finite values).
pub fn fixed_point<G>(
    mut g: G,
    x0: f64,
    cfg: SolverCfg,
) -> Result<IterationSequence<FixedPointRecord>, RootFindingError>
where G: FnMut(f64) -> Result<f64, EvaluationError> {
    let tol = cfg.tol();
    let mut rows = IterationSequence::with_capacity(cfg.max_iter());
    let mut x_prev = x0;

    for iter in 1..=cfg.max_iter() {
        let x    = g(x_prev)?;
        let erro = (x - x_prev).abs();

        trace!("{ALGORITHM} iter={iter} x={x} erro={erro}");
        rows.push(FixedPointRecord { iter, x, gx_prev: x, erro });

        if tolerances::check(None, erro, tol).is_some() {
            debug!("{ALGORITHM} converged after {iter} iterations: x={x}");
            return Ok(rows.converged(ToleranceSatisfied::StepSizeReached));
        }
        x_prev = x;
    }

    debug!("{ALGORITHM} hit max_iter={} without convergence", cfg.max_iter());
    Ok(rows)
}
