//! Tolerance-aware comparisons.
//!
//! Every bracket decision in the solver goes through one of these predicates instead of
//! inlining `± EPS` arithmetic.

use crate::constants::EPS;

/// `value ≤ reference` within [`EPS`].
#[inline]
pub fn is_at_or_below(value: f64, reference: f64) -> bool {
    value <= reference + EPS
}

/// `value > reference` by more than [`EPS`].
#[inline]
pub fn is_strictly_above(value: f64, reference: f64) -> bool {
    value > reference + EPS
}

/// `value ≥ reference` within [`EPS`].
#[inline]
pub fn is_at_or_above(value: f64, reference: f64) -> bool {
    value > reference - EPS
}

/// `value < reference` by more than [`EPS`].
#[inline]
pub fn is_strictly_below(value: f64, reference: f64) -> bool {
    value < reference - EPS
}

/// `|a - b| ≤ EPS`
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}
