//! Decomposition result model.

use serde::{Deserialize, Serialize};

/// Result of additive seasonal-trend decomposition.
///
/// For every index `t`, `value[t] = trend[t] + seasonal[t] + residual[t]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Trend component
    pub trend: Vec<f64>,
    /// Seasonal component
    pub seasonal: Vec<f64>,
    /// Residual component
    pub residual: Vec<f64>,
}

impl DecompositionResult {
    /// Number of decomposed periods.
    pub fn len(&self) -> usize {
        self.trend.len()
    }

    /// Whether the decomposition is empty.
    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Expected value per period: trend + seasonal.
    pub fn expected(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(self.seasonal.iter())
            .map(|(t, s)| t + s)
            .collect()
    }

    /// Reconstruct the original values: trend + seasonal + residual.
    pub fn reconstruct(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(self.seasonal.iter())
            .zip(self.residual.iter())
            .map(|((t, s), r)| t + s + r)
            .collect()
    }
}
