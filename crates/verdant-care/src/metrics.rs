//! Applying discrete care actions to a plant's metrics.
//!
//! A care action raises (or lowers) one metric by a signed delta, clamps it
//! into 0--100, appends a labelled entry to the care history, and for water
//! moves the `last_watered` timestamp. The input snapshot is never touched;
//! a new snapshot is returned only once every step has succeeded.

use chrono::{DateTime, Utc};
use tracing::debug;
use verdant_types::{CareHistoryEntry, CareMetric, PlantCareState, PotSize};

use crate::error::CareError;
use crate::numeric::{clamp_metric, to_decimal, to_f64};

/// Largest delta magnitude that can still matter: beyond it every metric in
/// 0--100 clamps to the same bound.
const DELTA_SATURATION: f64 = 200.0;

/// Parse a metric name as stored in documents (`"water"`, `"sunlight"`, ...).
///
/// Metrics are a closed set: anything else is [`CareError::InvalidMetricName`]
/// rather than a new key in the metrics map.
pub fn parse_metric(name: &str) -> Result<CareMetric, CareError> {
    CareMetric::ALL
        .into_iter()
        .find(|metric| metric.as_str() == name)
        .ok_or_else(|| CareError::InvalidMetricName(String::from(name)))
}

/// Parse a pot size as stored in documents (`"xsmall"` .. `"xlarge"`).
pub fn parse_pot_size(name: &str) -> Result<PotSize, CareError> {
    PotSize::ALL
        .into_iter()
        .find(|size| size.as_str() == name)
        .ok_or_else(|| CareError::InvalidPotSize(format!("unknown pot size {name:?}")))
}

/// Apply a signed change to one metric and record it in the care history.
///
/// # Behavior
///
/// 1. Uninitialized metrics start at zero for all four gauges.
/// 2. `metric` becomes `clamp(current + delta, 0, 100)`.
/// 3. `{ action: label, date: now }` is appended to the care history.
/// 4. If `metric` is water, `last_watered` becomes `now`.
///
/// Any finite `delta` is accepted; magnitudes past 200 saturate since the
/// clamp makes them indistinguishable. Fails with
/// [`CareError::NonFiniteInput`] if `delta` or the stored metric value is
/// NaN or infinite.
pub fn apply_action(
    state: &PlantCareState,
    metric: CareMetric,
    delta: f64,
    label: &str,
    now: DateTime<Utc>,
) -> Result<PlantCareState, CareError> {
    if !delta.is_finite() {
        return Err(CareError::NonFiniteInput { field: "delta" });
    }
    let delta_dec = to_decimal(delta.clamp(-DELTA_SATURATION, DELTA_SATURATION), "delta")?;
    let mut metrics = state.metrics.unwrap_or_default();
    let current = to_decimal(metrics.value(metric), metric.as_str())?;

    let raw = current
        .checked_add(delta_dec)
        .ok_or(CareError::ArithmeticOverflow {
            context: "metric plus delta",
        })?;
    let updated = to_f64(clamp_metric(raw), "clamped metric")?;

    metrics.set(metric, updated);

    let mut next = state.clone();
    next.metrics = Some(metrics);
    next.care_history.push(CareHistoryEntry {
        action: String::from(label),
        date: now,
    });
    if metric == CareMetric::Water {
        next.last_watered = now;
    }

    debug!(
        metric = metric.as_str(),
        delta,
        before = %current,
        after = updated,
        label,
        "Care action applied"
    );

    Ok(next)
}
