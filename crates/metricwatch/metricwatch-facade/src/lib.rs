//! Metricwatch Facade
//!
//! Unified re-exports for seasonal anomaly detection.
//!
//! This facade provides a single entry point to all detection functionality:
//! - `SeriesDecomposer`/`ResidualScorer` traits and models from SPI
//! - Configuration types from API
//! - `SeasonalDecomposer`, `RobustScorer`, and the pipeline from Core

// Re-export everything from SPI
pub use metricwatch_spi::*;

// Re-export everything from API
pub use metricwatch_api::*;

// Re-export everything from Core
pub use metricwatch_core::*;
