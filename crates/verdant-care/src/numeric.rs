//! Conversions between document numbers (`f64`) and [`Decimal`].
//!
//! Plant documents store plain JSON numbers. The engine does all of its
//! arithmetic in [`Decimal`] so rounding is exact and reproducible, and so
//! a NaN can never reach a persisted value.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::CareError;

/// Lower bound of every care metric.
pub(crate) const METRIC_MIN: Decimal = Decimal::ZERO;

/// Upper bound of every care metric.
pub(crate) const METRIC_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Convert a document number, rejecting NaN, infinities, and magnitudes
/// [`Decimal`] cannot hold.
pub(crate) fn to_decimal(value: f64, field: &'static str) -> Result<Decimal, CareError> {
    if !value.is_finite() {
        return Err(CareError::NonFiniteInput { field });
    }
    Decimal::from_f64(value).ok_or(CareError::NonFiniteInput { field })
}

/// Convert a computed value back into a document number.
pub(crate) fn to_f64(value: Decimal, context: &'static str) -> Result<f64, CareError> {
    value
        .to_f64()
        .ok_or(CareError::ArithmeticOverflow { context })
}

/// Round to a whole number, halves away from zero (4.5 -> 5, -4.5 -> -5).
pub(crate) fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp into the metric range.
pub(crate) fn clamp_metric(value: Decimal) -> Decimal {
    value.clamp(METRIC_MIN, METRIC_MAX)
}
