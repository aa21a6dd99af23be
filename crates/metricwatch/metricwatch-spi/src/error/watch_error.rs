//! Seasonal anomaly detection error types.

use thiserror::Error;

/// Errors that can occur during decomposition or scoring.
#[derive(Debug, Error)]
pub enum WatchError {
    /// Too few observations for the requested seasonal cycle
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Timestamp spacing is not constant across the series
    #[error("Irregular series at index {index}: expected spacing {expected}, found {actual}")]
    IrregularSeries {
        index: usize,
        expected: i64,
        actual: i64,
    },

    /// No residuals to score
    #[error("Empty input: no residuals to score")]
    EmptyInput,

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for metricwatch operations.
pub type Result<T> = std::result::Result<T, WatchError>;
