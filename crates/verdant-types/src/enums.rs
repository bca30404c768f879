//! Enumeration types for plant care.
//!
//! String forms match the values stored in plant documents and sent by the
//! frontend (`"water"`, `"medium"`, `"adjust_sunlight"`), so serde handles
//! the conversion in both directions.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Care metrics
// ---------------------------------------------------------------------------

/// One of the four gauges describing a plant's current care state.
///
/// Every metric value lives in the range 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum CareMetric {
    /// Soil moisture, as a percentage of pot capacity.
    Water,
    /// Light exposure.
    Sunlight,
    /// Nutrient level.
    Fertilizer,
    /// Ambient temperature comfort.
    Temperature,
}

impl CareMetric {
    /// Every known metric, in document order.
    pub const ALL: [Self; 4] = [Self::Water, Self::Sunlight, Self::Fertilizer, Self::Temperature];

    /// The document key for this metric.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Sunlight => "sunlight",
            Self::Fertilizer => "fertilizer",
            Self::Temperature => "temperature",
        }
    }
}

impl core::fmt::Display for CareMetric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Pot sizes
// ---------------------------------------------------------------------------

/// Pot size category chosen by the plant's owner.
///
/// Each size maps to a water capacity through the care configuration; the
/// mapping is data, not part of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum PotSize {
    /// Extra small pot.
    XSmall,
    /// Small pot.
    Small,
    /// Medium pot.
    Medium,
    /// Large pot.
    Large,
    /// Extra large pot.
    XLarge,
}

impl PotSize {
    /// Every pot size, smallest first.
    pub const ALL: [Self; 5] = [
        Self::XSmall,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::XLarge,
    ];

    /// The document value for this pot size.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::XSmall => "xsmall",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }
}

impl core::fmt::Display for PotSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Care actions
// ---------------------------------------------------------------------------

/// A discrete care action a user can take on a plant.
///
/// Which metric an action raises, by how much, and the history label it
/// records are configuration, not properties of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CareAction {
    /// Water the plant.
    Water,
    /// Move the plant into more light.
    AdjustSunlight,
    /// Feed the plant.
    Fertilize,
}

impl CareAction {
    /// Every care action.
    pub const ALL: [Self; 3] = [Self::Water, Self::AdjustSunlight, Self::Fertilize];

    /// The wire name of this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::AdjustSunlight => "adjust_sunlight",
            Self::Fertilize => "fertilize",
        }
    }
}

impl core::fmt::Display for CareAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_as_str() {
        for metric in CareMetric::ALL {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.as_str()));
        }
        for size in PotSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
        for action in CareAction::ALL {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
        }
    }

    #[test]
    fn unknown_pot_size_is_rejected_by_serde() {
        let parsed: Result<PotSize, _> = serde_json::from_str("\"huge\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn pot_sizes_order_smallest_first() {
        assert!(PotSize::XSmall < PotSize::Small);
        assert!(PotSize::Large < PotSize::XLarge);
    }
}
