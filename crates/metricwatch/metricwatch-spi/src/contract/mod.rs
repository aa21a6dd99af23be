//! Contract definitions for seasonal anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod decomposer;
mod scorer;

pub use decomposer::SeriesDecomposer;
pub use scorer::ResidualScorer;
