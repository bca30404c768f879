//! Error types for the `verdant` binary.
//!
//! [`CliError`] wraps every failure mode of a command so `main` can
//! propagate with `?` and exit non-zero.

use std::path::PathBuf;

use verdant_types::PlantId;

/// Top-level error for the `verdant` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: verdant_core::config::ConfigError,
    },

    /// A care computation failed.
    #[error("care error: {source}")]
    Care {
        /// The underlying engine error.
        #[from]
        source: verdant_care::CareError,
    },

    /// Reading or writing the plant snapshot failed.
    #[error("{}: {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The plant snapshot is not valid JSON for a list of plants.
    #[error("{}: {source}", .path.display())]
    Json {
        /// The file being parsed or written.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// No plant in the snapshot has the requested ID.
    #[error("plant not found: {0}")]
    PlantNotFound(PlantId),

    /// A `--now` argument is not an RFC 3339 timestamp.
    #[error("invalid timestamp {value:?}: {source}")]
    Timestamp {
        /// The rejected input.
        value: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },

    /// An action argument is not a known care action.
    #[error("unknown care action {0:?} (expected water, adjust-sunlight, or fertilize)")]
    UnknownAction(String),
}
