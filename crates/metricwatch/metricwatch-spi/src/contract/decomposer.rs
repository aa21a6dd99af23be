//! Trait for seasonal-trend decomposition.

use crate::error::Result;
use crate::model::{DecompositionResult, MetricSeries};

/// Splits a regular metric series into trend, seasonal, and residual
/// components under the additive model.
pub trait SeriesDecomposer: Send + Sync {
    /// Decompose `series` using a seasonal cycle of `period` observations.
    ///
    /// Fails with `InsufficientData` when the series is shorter than
    /// `2 * period`, and with `IrregularSeries` when timestamp spacing is
    /// not constant.
    fn decompose(&self, series: &MetricSeries, period: usize) -> Result<DecompositionResult>;
}
