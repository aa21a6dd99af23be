//! Metric series types.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WatchError};

/// Reporting cadence of a metric series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    /// Daily observations
    Daily,
    /// Monthly observations
    Monthly,
}

impl Frequency {
    /// Default seasonal cycle length for this cadence.
    ///
    /// Daily series repeat weekly (7), monthly series repeat yearly (12).
    pub fn default_period(&self) -> usize {
        match self {
            Frequency::Daily => 7,
            Frequency::Monthly => 12,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Daily => "Daily",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{}", s)
    }
}

/// A single observation of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Unix timestamp
    pub timestamp: i64,
    /// Observed value
    pub value: f64,
}

impl MetricPoint {
    /// Create a new metric point.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ordered metric series at a fixed cadence.
///
/// Timestamps must be strictly increasing with constant spacing; gaps must
/// be filled before decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    points: Vec<MetricPoint>,
}

impl MetricSeries {
    /// Create a series from observation points.
    pub fn new(points: Vec<MetricPoint>) -> Self {
        Self { points }
    }

    /// Create a regular series from a start timestamp, a fixed step, and values.
    pub fn from_values(start: i64, step: i64, values: &[f64]) -> Self {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &v)| MetricPoint::new(start + step * i as i64, v))
            .collect();
        Self { points }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The observation points in order.
    pub fn points(&self) -> &[MetricPoint] {
        &self.points
    }

    /// Extract the values in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Extract the timestamps in order.
    pub fn timestamps(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Spacing between the first two observations, if any.
    pub fn spacing(&self) -> Option<i64> {
        if self.points.len() < 2 {
            return None;
        }
        Some(self.points[1].timestamp - self.points[0].timestamp)
    }

    /// Verify strictly increasing timestamps with constant spacing.
    ///
    /// Returns the spacing on success. Series with fewer than two points
    /// are trivially regular with spacing 0.
    pub fn check_regular(&self) -> Result<i64> {
        if self.points.len() < 2 {
            return Ok(0);
        }
        let expected = self.points[1].timestamp - self.points[0].timestamp;
        if expected <= 0 {
            return Err(WatchError::IrregularSeries {
                index: 1,
                expected: expected.max(1),
                actual: expected,
            });
        }
        for (i, pair) in self.points.windows(2).enumerate() {
            let actual = pair[1].timestamp - pair[0].timestamp;
            if actual != expected {
                return Err(WatchError::IrregularSeries {
                    index: i + 1,
                    expected,
                    actual,
                });
            }
        }
        Ok(expected)
    }
}
