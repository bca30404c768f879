//! Shared type definitions for Verdant.
//!
//! This crate is the single source of truth for the plant document shape
//! used across the workspace. Types flow to `TypeScript` via `ts-rs` for the
//! dashboard frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Object-ID newtypes for plants and owners
//! - [`enums`] -- Care metrics, pot sizes, and care actions
//! - [`structs`] -- Care state, care history, and the plant document

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{CareAction, CareMetric, PotSize};
pub use ids::{OwnerId, PlantId};
pub use structs::{CareHistoryEntry, CareMetrics, PlantAvatar, PlantCareState, PlantRecord};
