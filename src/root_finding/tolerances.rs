//! Shared termination policy.
//!
//! Every method stops as soon as *either* criterion holds, checked once per
//! iteration after its record has been appended:
//! ├ |f(x)| < tol  → [`ToleranceSatisfied::AbsFxReached`]
//! └ |Δx|   < tol  → [`ToleranceSatisfied::StepSizeReached`]
//!
//! When both hold the function-value criterion is the one reported. A NaN
//! step (first bracket iteration) never satisfies the step criterion.

use super::report::ToleranceSatisfied;


/// Checks both criteria. `fx` is `None` for methods without a residual
/// (fixed-point iteration).
#[inline]
pub(crate) fn check(fx: Option<f64>, step: f64, tol: f64) -> Option<ToleranceSatisfied> {
    if fx.is_some_and(|v| v.abs() < tol) {
        return Some(ToleranceSatisfied::AbsFxReached);
    }
    if step < tol {
        return Some(ToleranceSatisfied::StepSizeReached);
    }
    None
}
