//! Metricwatch Service Provider Interface
//!
//! Defines traits and types for seasonal decomposition and robust scoring
//! of financial metric series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{ResidualScorer, SeriesDecomposer};
pub use error::{Result, WatchError};
pub use model::{
    Alert, AlertSeverity, AnomalyRecord, DecompositionResult, Frequency, MetricPoint,
    MetricSeries,
};
