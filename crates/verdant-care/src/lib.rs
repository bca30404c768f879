//! Care-metric engine for Verdant.
//!
//! This crate holds the only domain rules in the system: how a plant's
//! water drains over time, how care actions top metrics back up, and when a
//! plant asks to be watered. Everything here is pure computation over a
//! [`PlantCareState`] snapshot. Loading and saving plants, delivering
//! notices, and scheduling recomputation belong to the caller.
//!
//! The engine does not serialize concurrent writers. Two callers that read
//! the same snapshot, each apply an action, and each save will lose one
//! update at the store (last write wins).
//!
//! # Modules
//!
//! - [`actions`] -- Named care actions resolved through configuration
//! - [`config`] -- Pot capacities, action deltas, notify threshold ([`CareConfig`])
//! - [`decay`] -- Time-driven water decay ([`decay_water`], [`apply_decay`])
//! - [`error`] -- Error types for engine operations ([`CareError`])
//! - [`metrics`] -- Applying a signed delta to one metric ([`apply_action`])
//! - [`notify`] -- Watering reminders ([`should_notify`], [`WateringNotice`])
//!
//! [`PlantCareState`]: verdant_types::PlantCareState

pub mod actions;
pub mod config;
pub mod decay;
pub mod error;
pub mod metrics;
pub mod notify;

mod numeric;

// Re-export primary types at crate root for convenience.
pub use actions::{parse_action, perform_action};
pub use config::{ActionPolicy, CareConfig};
pub use decay::{WaterDecay, apply_decay, compute_decay, decay_water};
pub use error::CareError;
pub use metrics::{apply_action, parse_metric, parse_pot_size};
pub use notify::{WateringNotice, should_notify, watering_message, watering_notice};
