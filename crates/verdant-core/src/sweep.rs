//! Care sweep: the batch pass that brings a list of plants up to date.
//!
//! For each plant, independently:
//!
//! 1. **Decay** -- recompute the water metric for the time elapsed since the
//!    baseline. On success the plant's care state is replaced; on failure
//!    it is left exactly as it was and the error is recorded.
//! 2. **Notify** -- if the (possibly decayed) water metric is below the
//!    threshold, queue a watering notice.
//!
//! Plants share nothing, so one bad document never blocks the others and
//! the order of the slice does not affect any individual result.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use verdant_care::{CareConfig, CareError, WateringNotice, apply_decay, watering_notice};
use verdant_types::{PlantId, PlantRecord};

/// Water before and after decay for one plant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterChange {
    /// Water metric before the sweep.
    pub before: f64,
    /// Water metric after the sweep.
    pub after: f64,
}

/// A plant the sweep could not decay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepFailure {
    /// The plant that was skipped.
    pub plant_id: PlantId,
    /// Why decay failed.
    pub error: CareError,
}

/// Summary of one sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSummary {
    /// Number of plants examined.
    pub plants_seen: u32,
    /// Plants whose water metric changed.
    pub decayed: BTreeMap<PlantId, WaterChange>,
    /// Watering reminders, in slice order.
    pub notices: Vec<WateringNotice>,
    /// Plants left untouched because decay failed.
    pub failures: Vec<SweepFailure>,
}

/// Decay every plant at `now` and collect watering notices.
///
/// Plants are updated in place. A plant whose decay fails keeps its old
/// state but is still checked for a notice, since its stored water level
/// may already be low.
pub fn run_sweep(
    plants: &mut [PlantRecord],
    config: &CareConfig,
    now: DateTime<Utc>,
) -> SweepSummary {
    let mut summary = SweepSummary::default();

    for plant in plants.iter_mut() {
        summary.plants_seen = summary.plants_seen.saturating_add(1);

        match apply_decay(&plant.care, config, now) {
            Ok((next, decay)) => {
                if !decay.is_noop() {
                    summary.decayed.insert(
                        plant.id,
                        WaterChange {
                            before: plant.care.water(),
                            after: decay.water,
                        },
                    );
                }
                plant.care = next;
            }
            Err(error) => {
                warn!(
                    plant_id = %plant.id,
                    nickname = %plant.nickname,
                    error = %error,
                    "Skipping decay for plant"
                );
                summary.failures.push(SweepFailure {
                    plant_id: plant.id,
                    error,
                });
            }
        }

        if let Some(notice) = watering_notice(plant, config) {
            debug!(plant_id = %plant.id, water = notice.water, "Plant needs watering");
            summary.notices.push(notice);
        }
    }

    info!(
        plants = summary.plants_seen,
        decayed = summary.decayed.len(),
        notices = summary.notices.len(),
        failures = summary.failures.len(),
        "Care sweep complete"
    );

    summary
}

/// Collect watering notices without decaying anything.
pub fn check_notices(plants: &[PlantRecord], config: &CareConfig) -> Vec<WateringNotice> {
    plants
        .iter()
        .filter_map(|plant| watering_notice(plant, config))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};
    use verdant_types::{CareMetrics, PlantCareState, PotSize};

    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).single().unwrap()
    }

    fn plant(
        id: &str,
        nickname: &str,
        water: f64,
        pot_size: Option<PotSize>,
        needs: f64,
    ) -> PlantRecord {
        PlantRecord {
            id: id.parse().unwrap(),
            owner: "65f1c29be4b0a1b2c3d4e0f1".parse().unwrap(),
            plant_type: String::from("Calathea"),
            nickname: String::from(nickname),
            condition: None,
            location: None,
            acquisition_date: None,
            last_fertilized: None,
            avatar: None,
            care: PlantCareState {
                metrics: Some(CareMetrics {
                    water,
                    ..CareMetrics::ZERO
                }),
                pot_size,
                watering_needs: needs,
                last_watered: t0(),
                care_history: Vec::new(),
            },
        }
    }

    #[test]
    fn sweep_decays_and_notifies() {
        let cfg = CareConfig::default();
        let mut plants = vec![
            plant("65f1c2a9e4b0a1b2c3d4e501", "Dry", 80.0, Some(PotSize::Medium), 6.0),
            plant("65f1c2a9e4b0a1b2c3d4e502", "Fine", 100.0, Some(PotSize::Large), 3.0),
        ];
        let summary = run_sweep(&mut plants, &cfg, t0() + Duration::hours(24));

        assert_eq!(summary.plants_seen, 2);
        assert_eq!(summary.decayed.len(), 2);
        assert!(summary.failures.is_empty());
        // 80% of 9 -> 7 units, minus 6 -> 1 unit -> 11%
        let dry = plants.first().unwrap().care.water();
        assert!((dry - 11.0).abs() < f64::EPSILON, "dry = {dry}");
        // 100% of 15, minus 3 -> 80%
        let fine = plants.get(1).unwrap().care.water();
        assert!((fine - 80.0).abs() < f64::EPSILON, "fine = {fine}");

        assert_eq!(summary.notices.len(), 1);
        assert_eq!(
            summary.notices.first().unwrap().message,
            "Dry is in need of watering!"
        );
    }

    #[test]
    fn failing_plant_is_untouched_and_others_proceed() {
        let cfg = CareConfig::default();
        let broken = plant("65f1c2a9e4b0a1b2c3d4e503", "Potless", 30.0, None, 6.0);
        let mut plants = vec![
            broken.clone(),
            plant("65f1c2a9e4b0a1b2c3d4e504", "Ok", 80.0, Some(PotSize::Medium), 6.0),
        ];
        let summary = run_sweep(&mut plants, &cfg, t0() + Duration::hours(12));

        assert_eq!(plants.first(), Some(&broken));
        assert_eq!(summary.failures.len(), 1);
        let failure = summary.failures.first().unwrap();
        assert_eq!(failure.plant_id, broken.id);
        assert!(matches!(failure.error, CareError::InvalidPotSize(_)));
        assert_eq!(summary.decayed.len(), 1);
        // The broken plant is still low on water.
        assert!(summary.notices.iter().any(|n| n.plant_id == broken.id));
    }

    #[test]
    fn sweep_twice_at_same_instant_is_stable() {
        let cfg = CareConfig::default();
        let mut plants = vec![plant(
            "65f1c2a9e4b0a1b2c3d4e505",
            "Steady",
            90.0,
            Some(PotSize::XLarge),
            10.0,
        )];
        let now = t0() + Duration::hours(30);
        let first = run_sweep(&mut plants, &cfg, now);
        let after_first = plants.clone();
        let second = run_sweep(&mut plants, &cfg, now);

        assert_eq!(first.decayed.len(), 1);
        assert!(second.decayed.is_empty());
        assert_eq!(plants, after_first);
    }

    #[test]
    fn hourly_sweeps_lose_the_same_water_as_one_long_sweep() {
        // 12 units/day is half a unit per hour: every hourly step rounds.
        let cfg = CareConfig::default();
        let start = plant("65f1c2a9e4b0a1b2c3d4e506", "Ivy", 100.0, Some(PotSize::XLarge), 12.0);

        let mut once = vec![start.clone()];
        run_sweep(&mut once, &cfg, t0() + Duration::hours(12));

        let mut hourly = vec![start];
        for hour in 1..=12 {
            run_sweep(&mut hourly, &cfg, t0() + Duration::hours(hour));
        }

        // 25 units - 6 = 19 -> 76%
        let once_water = once.first().unwrap().care.water();
        let hourly_water = hourly.first().unwrap().care.water();
        assert!((once_water - 76.0).abs() < f64::EPSILON, "once = {once_water}");
        assert!(
            (hourly_water - once_water).abs() < f64::EPSILON,
            "hourly = {hourly_water}"
        );
        assert_eq!(
            hourly.first().unwrap().care.last_watered,
            once.first().unwrap().care.last_watered
        );
    }

    #[test]
    fn check_notices_does_not_decay() {
        let cfg = CareConfig::default();
        let plants = vec![
            plant("65f1c2a9e4b0a1b2c3d4e507", "Thirsty", 39.0, Some(PotSize::Small), 4.0),
            plant("65f1c2a9e4b0a1b2c3d4e508", "Edge", 40.0, Some(PotSize::Small), 4.0),
        ];
        let notices = check_notices(&plants, &cfg);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices.first().unwrap().nickname, "Thirsty");
    }

    #[test]
    fn empty_sweep() {
        let summary = run_sweep(&mut [], &CareConfig::default(), t0());
        assert_eq!(summary, SweepSummary::default());
    }
}
