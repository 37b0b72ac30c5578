//! Sign utilities for bracketing algorithms.
//! - `opposite_sign` : `true` if the product is strictly negative
//! - `same_sign`     : `true` if the product is strictly positive
//!
//! A zero factor is neither, so an endpoint that is already a root passes the
//! bracket precondition and is never kept by the retention rule.

/// Returns `true` if `x * y < 0`.
#[inline]
pub(crate) fn opposite_sign(x: f64, y: f64) -> bool {
    x * y < 0.0
}


/// Returns `true` if `x * y > 0`.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x * y > 0.0
}
