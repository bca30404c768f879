//! The care-action vocabulary: water, adjust sunlight, fertilize.
//!
//! Each action resolves to an [`ActionPolicy`] from the configuration and
//! is then applied through [`apply_action`].
//!
//! [`ActionPolicy`]: crate::config::ActionPolicy

use chrono::{DateTime, Utc};
use tracing::info;
use verdant_types::{CareAction, PlantCareState};

use crate::config::CareConfig;
use crate::error::CareError;
use crate::metrics::apply_action;

/// Perform a named care action using the configured delta and label.
pub fn perform_action(
    state: &PlantCareState,
    action: CareAction,
    config: &CareConfig,
    now: DateTime<Utc>,
) -> Result<PlantCareState, CareError> {
    let policy = config.policy_for(action)?;
    let next = apply_action(state, policy.metric, policy.delta, &policy.label, now)?;
    info!(
        action = action.as_str(),
        metric = policy.metric.as_str(),
        value = next.metrics.unwrap_or_default().value(policy.metric),
        "Care action performed"
    );
    Ok(next)
}

/// Parse an action name (`"water"`, `"adjust_sunlight"`, `"fertilize"`).
///
/// Dashes are accepted in place of underscores, as typed on a command line.
pub fn parse_action(name: &str) -> Option<CareAction> {
    let normalized = name.replace('-', "_");
    CareAction::ALL
        .into_iter()
        .find(|action| action.as_str() == normalized)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use verdant_types::{CareMetric, CareMetrics, PotSize};

    use super::*;

    fn state() -> PlantCareState {
        PlantCareState {
            metrics: Some(CareMetrics {
                water: 50.0,
                sunlight: 90.0,
                fertilizer: 10.0,
                temperature: 60.0,
            }),
            pot_size: Some(PotSize::Large),
            watering_needs: 5.0,
            last_watered: Utc
                .with_ymd_and_hms(2026, 9, 30, 7, 0, 0)
                .single()
                .unwrap(),
            care_history: Vec::new(),
        }
    }

    #[test]
    fn default_actions_apply_their_deltas() {
        let cfg = CareConfig::default();
        let now = Utc::now();
        let expectations = [
            (CareAction::Water, CareMetric::Water, 80.0, "Watered"),
            (CareAction::AdjustSunlight, CareMetric::Sunlight, 100.0, "Adjusted sunlight"),
            (CareAction::Fertilize, CareMetric::Fertilizer, 30.0, "Fertilized"),
        ];
        for (action, metric, expected, label) in expectations {
            let next = perform_action(&state(), action, &cfg, now).unwrap();
            let value = next.metrics.unwrap().value(metric);
            assert!((value - expected).abs() < f64::EPSILON, "{action}: {value}");
            assert_eq!(
                next.care_history.last().map(|e| e.action.as_str()),
                Some(label)
            );
        }
    }

    #[test]
    fn only_water_moves_last_watered() {
        let cfg = CareConfig::default();
        let now = Utc::now();
        let before = state();
        let fed = perform_action(&before, CareAction::Fertilize, &cfg, now);
        assert_eq!(fed.map(|s| s.last_watered), Ok(before.last_watered));
        let watered = perform_action(&before, CareAction::Water, &cfg, now);
        assert_eq!(watered.map(|s| s.last_watered), Ok(now));
    }

    #[test]
    fn unconfigured_action_fails() {
        let mut cfg = CareConfig::default();
        cfg.actions.clear();
        assert_eq!(
            perform_action(&state(), CareAction::Water, &cfg, Utc::now()),
            Err(CareError::UnconfiguredAction(CareAction::Water))
        );
    }

    #[test]
    fn parses_action_names() {
        assert_eq!(parse_action("water"), Some(CareAction::Water));
        assert_eq!(parse_action("adjust-sunlight"), Some(CareAction::AdjustSunlight));
        assert_eq!(parse_action("adjust_sunlight"), Some(CareAction::AdjustSunlight));
        assert_eq!(parse_action("prune"), None);
    }
}
