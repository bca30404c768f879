//! Plant document and care-state structs.
//!
//! Field names serialize in camelCase so these types read and write the
//! same JSON documents the plant store holds (`careMetrics`, `potSize`,
//! `lastWatered`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CareMetric, PotSize};
use crate::ids::{OwnerId, PlantId};

// ---------------------------------------------------------------------------
// Care metrics
// ---------------------------------------------------------------------------

/// The four care gauges of a plant, each in the range 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CareMetrics {
    /// Soil moisture as a percentage of pot capacity.
    pub water: f64,
    /// Light exposure.
    pub sunlight: f64,
    /// Nutrient level.
    pub fertilizer: f64,
    /// Temperature comfort.
    pub temperature: f64,
}

impl CareMetrics {
    /// All four metrics at zero, the state of a freshly initialized plant.
    pub const ZERO: Self = Self {
        water: 0.0,
        sunlight: 0.0,
        fertilizer: 0.0,
        temperature: 0.0,
    };

    /// Read one metric.
    pub const fn value(&self, metric: CareMetric) -> f64 {
        match metric {
            CareMetric::Water => self.water,
            CareMetric::Sunlight => self.sunlight,
            CareMetric::Fertilizer => self.fertilizer,
            CareMetric::Temperature => self.temperature,
        }
    }

    /// Overwrite one metric.
    pub const fn set(&mut self, metric: CareMetric, value: f64) {
        match metric {
            CareMetric::Water => self.water = value,
            CareMetric::Sunlight => self.sunlight = value,
            CareMetric::Fertilizer => self.fertilizer = value,
            CareMetric::Temperature => self.temperature = value,
        }
    }
}

impl Default for CareMetrics {
    fn default() -> Self {
        Self::ZERO
    }
}

/// One entry in a plant's care log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CareHistoryEntry {
    /// Human-readable label, e.g. `"Watered"`.
    pub action: String,
    /// When the action was taken.
    pub date: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Care state
// ---------------------------------------------------------------------------

/// The part of a plant document the care engine reads and writes.
///
/// This is a snapshot: the engine never persists it. Callers load it from
/// the store, hand it to the engine, and save whatever comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlantCareState {
    /// Current gauges. `None` until the first care action initializes them.
    #[serde(rename = "careMetrics", default)]
    pub metrics: Option<CareMetrics>,
    /// Pot size category. Older documents may not have one.
    #[serde(default)]
    pub pot_size: Option<PotSize>,
    /// Daily water-level decrease, in capacity units per day.
    pub watering_needs: f64,
    /// Last watering, or the last decay recomputation baseline.
    pub last_watered: DateTime<Utc>,
    /// Care log, oldest first.
    #[serde(default)]
    pub care_history: Vec<CareHistoryEntry>,
}

impl PlantCareState {
    /// Current water metric, treating uninitialized metrics as zero.
    pub fn water(&self) -> f64 {
        self.metrics.unwrap_or_default().water
    }
}

// ---------------------------------------------------------------------------
// Plant document
// ---------------------------------------------------------------------------

/// Avatar settings shown for a plant in the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlantAvatar {
    /// Avatar artwork variant.
    pub variant: u32,
    /// Facial expression, e.g. `"happy"`.
    pub expression: String,
    /// Color theme name.
    pub color: String,
    /// Uploaded image URL, if any.
    #[serde(default)]
    pub url: Option<String>,
    /// Image host identifier used to delete the upload.
    #[serde(default)]
    pub public_id: Option<String>,
}

/// A persisted plant document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PlantRecord {
    /// Document identifier.
    #[serde(rename = "_id")]
    pub id: PlantId,
    /// Owning user.
    #[serde(rename = "user")]
    pub owner: OwnerId,
    /// Species or common type, e.g. `"Monstera"`.
    pub plant_type: String,
    /// Owner-chosen name shown in notifications.
    pub nickname: String,
    /// Free-text health description.
    #[serde(default)]
    pub condition: Option<String>,
    /// Where the plant lives, e.g. `"Kitchen window"`.
    #[serde(default)]
    pub location: Option<String>,
    /// When the owner got the plant.
    #[serde(default)]
    pub acquisition_date: Option<DateTime<Utc>>,
    /// Set at creation; not touched by care actions.
    #[serde(default)]
    pub last_fertilized: Option<DateTime<Utc>>,
    /// Gallery avatar.
    #[serde(default)]
    pub avatar: Option<PlantAvatar>,
    /// Care metrics, timestamps, and history.
    #[serde(flatten)]
    pub care: PlantCareState,
}
