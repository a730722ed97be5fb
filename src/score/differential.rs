use super::{EngineError, ensure_finite};
use crate::model::DEFAULT_SLOPE;

/// Slope of a course of standard difficulty; differentials are normalised to it.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Rounds to one decimal place, halves away from zero.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `(adjusted gross - rating) * 113 / slope`, rounded to a tenth.
///
/// A zero slope is treated as a missing one and replaced by 113.
///
/// # Errors
///
/// Will return `Err` if the rating is not finite and the result would be NaN or infinite
pub fn compute_differential(adj_gross: i32, rating: f64, slope: i32) -> Result<f64, EngineError> {
    let slope = if slope == 0 { DEFAULT_SLOPE } else { slope };
    let raw = (f64::from(adj_gross) - rating) * STANDARD_SLOPE / f64::from(slope);
    ensure_finite(round1(raw), "differential")
}
