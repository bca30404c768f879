//! Error types for the `verdant-care` crate.
//!
//! Every engine operation either returns a complete new value or one of
//! these errors. Nothing here is retryable: the inputs are wrong, and the
//! caller decides what the user sees.

use verdant_types::CareAction;

/// Errors that can occur while computing care-metric updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CareError {
    /// A metric name is not one of the four known metrics.
    #[error("unknown care metric: {0:?}")]
    InvalidMetricName(String),

    /// A pot size is missing, unknown, or has no configured capacity.
    #[error("invalid pot size: {0}")]
    InvalidPotSize(String),

    /// A numeric input is NaN, infinite, or too large to compute with.
    #[error("non-finite or out-of-range value for {field}")]
    NonFiniteInput {
        /// The offending input, e.g. `"delta"` or `"wateringNeeds"`.
        field: &'static str,
    },

    /// The plant's watering needs are below zero.
    #[error("watering needs must not be negative")]
    NegativeWateringNeeds,

    /// No delta and label are configured for a care action.
    #[error("care action {0} is not configured")]
    UnconfiguredAction(CareAction),

    /// The care configuration failed validation.
    #[error("invalid care configuration: {reason}")]
    InvalidConfig {
        /// Description of the rejected setting.
        reason: String,
    },

    /// Checked decimal arithmetic overflowed.
    #[error("arithmetic overflow in care computation: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: &'static str,
    },
}
