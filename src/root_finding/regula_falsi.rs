//! Regula falsi (false position) method

use log::{debug, trace};

use super::algorithms::Method;
use super::bisection::checked_bracket;
use super::config::SolverCfg;
use super::errors::{NumericError, RootFindingError};
use super::report::{BracketRecord, IterationSequence};
use super::signs::opposite_sign;
use super::tolerances;
use crate::expression::EvaluationError;

const ALGORITHM: &str = Method::RegulaFalsi.algorithm_name();


/// x-intercept of the chord through `(a, fa)` and `(b, fb)`.
///
/// # Returns
/// ├ Ok(c) with `c = b - fb * (b - a) / (fb - fa)`
/// └ Err(NumericError::FlatBracket) if `fb == fa`
#[inline]
fn false_position(a: f64, fa: f64, b: f64, fb: f64) -> Result<f64, NumericError> {
    let denom = fb - fa;
    if denom == 0.0 {
        return Err(NumericError::FlatBracket { a, b });
    }
    Ok(b - fb * (b - a) / denom)
}


/// Finds a root of a function using the
/// [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - Left end of the bracket.
/// ├ `b`    - Right end of the bracket.
/// └ `cfg`  - [`SolverCfg`] with `tol` and `max_iter`.
///
/// # Returns
///
/// An [`IterationSequence`] of [`BracketRecord`]s, as for
/// [`bisection`](super::bisection::bisection), with `x` the chord intercept.
///
/// # Errors
///
/// ┌ [`PreconditionError::NoSignChange`](super::errors::PreconditionError) - `f(a) * f(b) > 0`.
/// ├ [`NumericError::FlatBracket`]       - `f(a) == f(b)` when forming the chord.
/// └ [`RootFindingError::Evaluation`]    - `func` failed at some point.
///
/// # Notes
/// - Pure regula falsi: one endpoint may stay fixed for many iterations, so
///   convergence is usually through the `|f(x)| < tol` criterion.
pub fn regula_falsi<F>(
    mut func: F,
    mut a: f64,
    mut b: f64,
    cfg: SolverCfg,
) -> Result<IterationSequence<BracketRecord>, RootFindingError>
where F: FnMut(f64) -> Result<f64, EvaluationError> {
    let tol = cfg.tol();
    let (mut fa, mut fb) = checked_bracket(&mut func, a, b)?;

    let mut rows = IterationSequence::with_capacity(cfg.max_iter());
    let mut x_prev: Option<f64> = None;

    for iter in 1..=cfg.max_iter() {
        let c  = false_position(a, fa, b, fb)?;
        let fc = func(c)?;
        let erro = x_prev.map_or(f64::NAN, |p| (c - p).abs());

        trace!("{ALGORITHM} iter={iter} a={a} b={b} x={c} f(x)={fc} erro={erro}");
        rows.push(BracketRecord { iter, a, b, x: c, fx: fc, erro });

        if let Some(reached) = tolerances::check(Some(fc), erro, tol) {
            debug!("{ALGORITHM} converged after {iter} iterations: x={c} ({reached:?})");
            return Ok(rows.converged(reached));
        }

        // keep the sign change
        if opposite_sign(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
        x_prev = Some(c);
    }

    debug!("{ALGORITHM} hit max_iter={} without convergence", cfg.max_iter());
    Ok(rows)
}
