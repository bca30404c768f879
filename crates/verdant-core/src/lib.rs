//! Configuration and batch orchestration for Verdant.
//!
//! This crate sits between the pure care engine (`verdant-care`) and the
//! programs that own plant storage. It loads `verdant.yaml` into typed
//! structs and runs the care sweep that decays water and collects watering
//! reminders across a list of plants.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `verdant.yaml` into
//!   strongly-typed structs.
//! - [`sweep`] -- Batch decay and notification pass over many plants.

pub mod config;
pub mod sweep;
