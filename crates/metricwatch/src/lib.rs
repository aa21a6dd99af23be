//! # metricwatch
//!
//! Seasonal anomaly detection for financial metric series.
//!
//! Splits a regular series into trend, seasonal, and residual components
//! (additive model), scores the residuals with a median/MAD robust
//! z-score, and flags outliers with an optional persistence rule.
//!
//! ```
//! use metricwatch::{DetectorConfig, MetricSeries, SeasonalAnomalyDetector};
//!
//! let mut values = vec![100.0; 24];
//! values[17] = 500.0;
//! let series = MetricSeries::from_values(0, 2_592_000, &values);
//!
//! let detector = SeasonalAnomalyDetector::new(DetectorConfig::new(12)).unwrap();
//! let records = detector.detect(&series).unwrap();
//! assert!(records[17].anomaly);
//! ```

pub use metricwatch_facade::*;
