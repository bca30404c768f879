//! Time-driven water decay.
//!
//! A plant loses `watering_needs` capacity units of water per day, prorated
//! to the hours since its decay baseline (`last_watered`). The water metric
//! is a percentage of the pot's capacity, so the computation converts to
//! absolute units, takes the loss away, and converts back:
//!
//! ```text
//! capacity      = pot_capacity[pot_size]
//! current       = round(water * capacity / 100)
//! level_change  = round(elapsed_hours * watering_needs / 24)
//! water'        = clamp(round((current - level_change) / capacity * 100), 0, 100)
//! ```
//!
//! Every `round` is half away from zero. A baseline later than `now` counts
//! as zero elapsed time. When the level change rounds to zero the water
//! metric is returned as-is, so recomputing immediately after a watering
//! never nudges the value through the unit conversion.
//!
//! Applying a decay moves the baseline forward by exactly the time the
//! whole units in `level_change` stand for (`level_change * 24h /
//! watering_needs`), not to `now`. The rounding remainder carries into the
//! next recomputation, so the total loss does not depend on how often a
//! plant is swept.
//!
//! These functions are pure: plants can be decayed in any order, or in
//! parallel, with no shared state.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;
use verdant_types::{CareMetric, PlantCareState};

use crate::config::CareConfig;
use crate::error::CareError;
use crate::numeric::{clamp_metric, round_whole, to_decimal, to_f64};

/// Milliseconds per hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Milliseconds per day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Hours per day, the period `watering_needs` is expressed over.
const HOURS_PER_DAY: i64 = 24;

/// Outcome of a decay computation for one plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterDecay {
    /// New water metric, in 0--100.
    pub water: f64,
    /// Capacity units lost since the baseline (0 when nothing changed).
    pub level_change: i64,
    /// Hours between the baseline and `now`, floored at zero.
    pub elapsed_hours: f64,
    /// Baseline for the next recomputation: the old one advanced by the
    /// time `level_change` accounts for. May lie slightly after `now` when
    /// the level change was rounded up.
    pub baseline: DateTime<Utc>,
}

impl WaterDecay {
    /// Whether applying this decay changes the plant.
    pub const fn is_noop(&self) -> bool {
        self.level_change == 0
    }
}

/// Compute the water decay for a plant at `now`, with the intermediate
/// quantities.
pub fn compute_decay(
    state: &PlantCareState,
    config: &CareConfig,
    now: DateTime<Utc>,
) -> Result<WaterDecay, CareError> {
    let pot_size = state
        .pot_size
        .ok_or_else(|| CareError::InvalidPotSize(String::from("pot size is not set")))?;
    let capacity = Decimal::from(config.capacity_for(pot_size)?);

    let watering_needs = to_decimal(state.watering_needs, "wateringNeeds")?;
    if watering_needs < Decimal::ZERO {
        return Err(CareError::NegativeWateringNeeds);
    }
    let water = to_decimal(state.water(), CareMetric::Water.as_str())?;

    let elapsed = elapsed_hours(state.last_watered, now)?;

    // Percentage of capacity -> absolute units.
    let current_amount = round_whole(
        water
            .checked_mul(capacity)
            .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(CareError::ArithmeticOverflow {
                context: "current water amount",
            })?,
    );

    let level_change = round_whole(
        elapsed
            .checked_mul(watering_needs)
            .and_then(|v| v.checked_div(Decimal::from(HOURS_PER_DAY)))
            .ok_or(CareError::ArithmeticOverflow {
                context: "water level change",
            })?,
    );

    let elapsed_hours = to_f64(elapsed, "elapsed hours")?;

    if level_change.is_zero() {
        return Ok(WaterDecay {
            water: to_f64(clamp_metric(water), "unchanged water")?,
            level_change: 0,
            elapsed_hours,
            baseline: state.last_watered,
        });
    }

    let new_amount = current_amount
        .checked_sub(level_change)
        .ok_or(CareError::ArithmeticOverflow {
            context: "new water amount",
        })?;

    // Absolute units -> percentage of capacity.
    let new_metric = round_whole(
        new_amount
            .checked_div(capacity)
            .and_then(|v| v.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(CareError::ArithmeticOverflow {
                context: "new water metric",
            })?,
    );

    let baseline = advance_baseline(state.last_watered, level_change, watering_needs)?;

    let level_change = level_change.to_i64().ok_or(CareError::ArithmeticOverflow {
        context: "level change out of range",
    })?;

    Ok(WaterDecay {
        water: to_f64(clamp_metric(new_metric), "decayed water")?,
        level_change,
        elapsed_hours,
        baseline,
    })
}

/// New water metric for a plant at `now`.
///
/// The caller merges the value into the plant and persists it; see
/// [`apply_decay`] for a version that returns the merged snapshot.
pub fn decay_water(
    state: &PlantCareState,
    config: &CareConfig,
    now: DateTime<Utc>,
) -> Result<f64, CareError> {
    compute_decay(state, config, now).map(|decay| decay.water)
}

/// Decay a plant's water and return the updated snapshot with the outcome.
///
/// When water was lost, `last_watered` moves to [`WaterDecay::baseline`] so
/// the next recomputation neither counts the same hours twice nor drops the
/// hours the rounding left over. A no-op decay returns an identical
/// snapshot.
pub fn apply_decay(
    state: &PlantCareState,
    config: &CareConfig,
    now: DateTime<Utc>,
) -> Result<(PlantCareState, WaterDecay), CareError> {
    let decay = compute_decay(state, config, now)?;

    let mut next = state.clone();
    if !decay.is_noop() {
        let mut metrics = next.metrics.unwrap_or_default();
        metrics.set(CareMetric::Water, decay.water);
        next.metrics = Some(metrics);
        next.last_watered = decay.baseline;
    }

    debug!(
        before = state.water(),
        after = decay.water,
        level_change = decay.level_change,
        elapsed_hours = decay.elapsed_hours,
        baseline = %decay.baseline,
        "Water decay computed"
    );

    Ok((next, decay))
}

/// Fractional hours from `since` to `now`, or zero if `now` is earlier.
fn elapsed_hours(since: DateTime<Utc>, now: DateTime<Utc>) -> Result<Decimal, CareError> {
    let millis = now.signed_duration_since(since).num_milliseconds();
    if millis < 0 {
        debug!(
            %since,
            %now,
            "Decay baseline is after now, treating elapsed time as zero"
        );
        return Ok(Decimal::ZERO);
    }
    Decimal::from(millis)
        .checked_div(Decimal::from(MILLIS_PER_HOUR))
        .ok_or(CareError::ArithmeticOverflow {
            context: "elapsed hours",
        })
}

/// Move `since` forward by the time it takes to lose `level_change` units
/// at `watering_needs` units per day, to the nearest millisecond.
fn advance_baseline(
    since: DateTime<Utc>,
    level_change: Decimal,
    watering_needs: Decimal,
) -> Result<DateTime<Utc>, CareError> {
    let overflow = CareError::ArithmeticOverflow {
        context: "decay baseline",
    };
    let millis = level_change
        .checked_mul(Decimal::from(MILLIS_PER_DAY))
        .and_then(|v| v.checked_div(watering_needs))
        .map(round_whole)
        .and_then(|v| v.to_i64())
        .ok_or_else(|| overflow.clone())?;
    Duration::try_milliseconds(millis)
        .and_then(|d| since.checked_add_signed(d))
        .ok_or(overflow)
}
