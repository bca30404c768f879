//! Watering notifications.
//!
//! A plant needs watering when its water metric is strictly below the
//! configured threshold (40 by default). The engine only decides and words
//! the notice; delivering it (toast, push, log line) belongs to the caller.

use serde::Serialize;
use verdant_types::{PlantCareState, PlantId, PlantRecord};

use crate::config::CareConfig;

/// A watering reminder ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WateringNotice {
    /// The plant that needs water.
    pub plant_id: PlantId,
    /// The plant's nickname.
    pub nickname: String,
    /// Water metric that triggered the notice.
    pub water: f64,
    /// Human-readable message.
    pub message: String,
}

/// Whether a plant's water metric is below the notify threshold.
///
/// Uninitialized metrics count as zero water, so a plant nobody has cared
/// for yet asks to be watered. A NaN water value never notifies.
pub fn should_notify(state: &PlantCareState, config: &CareConfig) -> bool {
    state.water() < config.notify_threshold
}

/// The reminder text for a plant.
pub fn watering_message(nickname: &str) -> String {
    format!("{nickname} is in need of watering!")
}

/// Build a notice for a plant if it needs watering.
pub fn watering_notice(record: &PlantRecord, config: &CareConfig) -> Option<WateringNotice> {
    should_notify(&record.care, config).then(|| WateringNotice {
        plant_id: record.id,
        nickname: record.nickname.clone(),
        water: record.care.water(),
        message: watering_message(&record.nickname),
    })
}
