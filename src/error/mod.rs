//! Error handling for the pre-test probability engine.

/// Specialized error type for risk estimation
///
/// The two variants are deliberately distinct: an age outside the tabulated
/// range is a defined clinical limit of the risk table, while invalid input
/// is a caller contract violation caught at the boundary before any lookup.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RiskError {
    /// Age outside the range covered by the risk table
    #[error("age {0} is outside the tabulated range (30-69 years)")]
    AgeOutOfRange(u32),

    /// Input outside the fixed vocabulary (sex, symptom, risk factor) or
    /// an age that could not be parsed as a non-negative integer
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for risk estimation operations
pub type Result<T> = std::result::Result<T, RiskError>;
