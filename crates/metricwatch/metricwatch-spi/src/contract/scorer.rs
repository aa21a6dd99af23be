//! Trait for robust residual scoring.

use crate::error::Result;
use crate::model::{AnomalyRecord, DecompositionResult, MetricSeries};

/// Scores decomposition residuals and flags outliers.
///
/// Implementations are pure functions of their full input; no state is
/// kept between calls.
pub trait ResidualScorer: Send + Sync {
    /// Compute a standardized score per residual without thresholding.
    fn robust_scores(&self, residuals: &[f64]) -> Result<Vec<f64>>;

    /// Produce one `AnomalyRecord` per period of `series`, in order.
    ///
    /// Fails with `EmptyInput` when there are no residuals to score.
    fn score(
        &self,
        series: &MetricSeries,
        decomposition: &DecompositionResult,
    ) -> Result<Vec<AnomalyRecord>>;
}
