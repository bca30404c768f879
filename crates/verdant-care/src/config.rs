//! Tunable policy for the care engine.
//!
//! The pot-capacity table, the per-action deltas and labels, and the
//! watering-notice threshold are data rather than engine logic. The
//! [`CareConfig`] struct bundles them so callers (the sweep, the CLI, tests)
//! can override the defaults, typically from the `care` section of
//! `verdant.yaml`.

use std::collections::BTreeMap;

use serde::Deserialize;
use verdant_types::{CareAction, CareMetric, PotSize};

use crate::error::CareError;

/// What a care action does to a plant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionPolicy {
    /// The metric the action changes.
    pub metric: CareMetric,
    /// Signed change applied to that metric before clamping.
    pub delta: f64,
    /// Label recorded in the care history, e.g. `"Watered"`.
    pub label: String,
}

impl ActionPolicy {
    fn new(metric: CareMetric, delta: f64, label: &str) -> Self {
        Self {
            metric,
            delta,
            label: String::from(label),
        }
    }
}

/// Configuration for care-metric computations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    /// Water capacity units per pot size (defaults: 1, 4, 9, 15, 25).
    pub pot_capacity: BTreeMap<PotSize, u32>,

    /// Metric, delta, and history label per care action.
    ///
    /// Defaults: water +30 "Watered", sunlight +25 "Adjusted sunlight",
    /// fertilizer +20 "Fertilized".
    pub actions: BTreeMap<CareAction, ActionPolicy>,

    /// Water level strictly below which a plant needs watering (default: 40).
    /// Must lie within the metric range 0--100.
    pub notify_threshold: f64,
}

impl Default for CareConfig {
    fn default() -> Self {
        let pot_capacity = BTreeMap::from([
            (PotSize::XSmall, 1),
            (PotSize::Small, 4),
            (PotSize::Medium, 9),
            (PotSize::Large, 15),
            (PotSize::XLarge, 25),
        ]);
        let actions = BTreeMap::from([
            (
                CareAction::Water,
                ActionPolicy::new(CareMetric::Water, 30.0, "Watered"),
            ),
            (
                CareAction::AdjustSunlight,
                ActionPolicy::new(CareMetric::Sunlight, 25.0, "Adjusted sunlight"),
            ),
            (
                CareAction::Fertilize,
                ActionPolicy::new(CareMetric::Fertilizer, 20.0, "Fertilized"),
            ),
        ]);
        Self {
            pot_capacity,
            actions,
            notify_threshold: 40.0,
        }
    }
}

impl CareConfig {
    /// Capacity in water units for a pot size.
    ///
    /// Fails with [`CareError::InvalidPotSize`] when the size is missing from
    /// the table or mapped to zero, since neither can be divided by.
    pub fn capacity_for(&self, pot_size: PotSize) -> Result<u32, CareError> {
        match self.pot_capacity.get(&pot_size) {
            Some(&capacity) if capacity > 0 => Ok(capacity),
            Some(_) => Err(CareError::InvalidPotSize(format!(
                "{pot_size} has zero capacity"
            ))),
            None => Err(CareError::InvalidPotSize(format!(
                "{pot_size} has no configured capacity"
            ))),
        }
    }

    /// The configured policy for a care action.
    pub fn policy_for(&self, action: CareAction) -> Result<&ActionPolicy, CareError> {
        self.actions
            .get(&action)
            .ok_or(CareError::UnconfiguredAction(action))
    }

    /// Check that every pot size and action is configured with usable values.
    pub fn validate(&self) -> Result<(), CareError> {
        for pot_size in PotSize::ALL {
            self.capacity_for(pot_size).map_err(|e| CareError::InvalidConfig {
                reason: e.to_string(),
            })?;
        }

        for action in CareAction::ALL {
            let policy = self.policy_for(action).map_err(|e| CareError::InvalidConfig {
                reason: e.to_string(),
            })?;
            if !policy.delta.is_finite() {
                return Err(CareError::InvalidConfig {
                    reason: format!("delta for {action} is not finite"),
                });
            }
        }

        if !(0.0..=100.0).contains(&self.notify_threshold) {
            return Err(CareError::InvalidConfig {
                reason: format!(
                    "notify_threshold must be within 0..=100, got {}",
                    self.notify_threshold
                ),
            });
        }

        Ok(())
    }
}
