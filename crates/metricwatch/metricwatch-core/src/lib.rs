//! Metricwatch Core
//!
//! Implementations for seasonal-trend decomposition, robust residual
//! scoring, gap filling, and alert assembly.

pub mod alerting;
pub mod decomposition;
pub mod gapfill;
pub mod pipeline;
pub mod scoring;
pub mod stats;

// Re-export SPI traits and models for implementations
pub use metricwatch_spi::{
    Alert, AlertSeverity, AnomalyRecord, DecompositionResult, MetricPoint, MetricSeries,
    ResidualScorer, Result, SeriesDecomposer, WatchError,
};

// Re-export main types
pub use alerting::{build_alert, build_alerts};
pub use decomposition::SeasonalDecomposer;
pub use gapfill::{fill_gaps, GapFillPolicy};
pub use pipeline::SeasonalAnomalyDetector;
pub use scoring::{RobustScorer, MAD_EPSILON, MAD_NORMAL_CONSISTENCY};
