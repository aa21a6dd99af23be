//! Robust residual scoring.

use metricwatch_api::ScoringConfig;
use metricwatch_spi::{
    AnomalyRecord, DecompositionResult, MetricSeries, ResidualScorer, Result, WatchError,
};

use crate::stats::{iqr, mad, median};

/// Calibrates MAD to estimate the standard deviation of normal data.
pub const MAD_NORMAL_CONSISTENCY: f64 = 0.6745;

/// Substituted for a zero MAD so scores stay finite.
pub const MAD_EPSILON: f64 = 1e-9;

/// Median/MAD-based outlier scorer with a persistence rule.
///
/// Scores each residual as `0.6745 * (residual - median) / MAD`, flags
/// scores beyond the threshold, and confirms a flag only when it has held
/// for `persistence` consecutive periods ending at the current one.
#[derive(Debug, Clone)]
pub struct RobustScorer {
    threshold: f64,
    persistence: usize,
    adaptive_threshold: bool,
}

impl RobustScorer {
    /// Create a scorer with the given threshold and persistence run length.
    pub fn new(threshold: f64, persistence: usize) -> Self {
        Self {
            threshold,
            persistence,
            adaptive_threshold: false,
        }
    }

    /// Create from configuration.
    pub fn from_config(config: ScoringConfig) -> Self {
        Self {
            threshold: config.threshold,
            persistence: config.persistence,
            adaptive_threshold: config.adaptive_threshold,
        }
    }

    /// Threshold applied to the given scores.
    ///
    /// Fixed by default; in adaptive mode derived from the score spread
    /// and clamped to [3.0, 5.0].
    fn effective_threshold(&self, scores: &[f64]) -> f64 {
        if self.adaptive_threshold {
            (1.5 + iqr(scores)).clamp(3.0, 5.0)
        } else {
            self.threshold
        }
    }
}

impl Default for RobustScorer {
    fn default() -> Self {
        Self::from_config(ScoringConfig::default())
    }
}

impl ResidualScorer for RobustScorer {
    fn robust_scores(&self, residuals: &[f64]) -> Result<Vec<f64>> {
        if residuals.is_empty() {
            return Err(WatchError::EmptyInput);
        }
        let center = median(residuals);
        let spread = mad(residuals);
        // Identical residuals give MAD = 0; the epsilon keeps the score
        // finite instead of dividing by zero
        let spread = if spread == 0.0 { MAD_EPSILON } else { spread };
        Ok(residuals
            .iter()
            .map(|r| MAD_NORMAL_CONSISTENCY * (r - center) / spread)
            .collect())
    }

    fn score(
        &self,
        series: &MetricSeries,
        decomposition: &DecompositionResult,
    ) -> Result<Vec<AnomalyRecord>> {
        if decomposition.residual.is_empty() {
            return Err(WatchError::EmptyInput);
        }
        if series.len() != decomposition.len() {
            return Err(WatchError::InvalidParameter {
                name: "decomposition".to_string(),
                reason: format!(
                    "length {} does not match series length {}",
                    decomposition.len(),
                    series.len()
                ),
            });
        }

        let scores = self.robust_scores(&decomposition.residual)?;
        let threshold = self.effective_threshold(&scores);
        let flags: Vec<bool> = scores.iter().map(|z| z.abs() > threshold).collect();
        let confirmed = confirm_runs(&flags, self.persistence);
        let expected = decomposition.expected();

        Ok(series
            .points()
            .iter()
            .enumerate()
            .map(|(i, p)| AnomalyRecord {
                timestamp: p.timestamp,
                value: p.value,
                expected: expected[i],
                residual: decomposition.residual[i],
                robust_z: scores[i],
                anomaly: flags[i],
                confirmed: confirmed[i],
            })
            .collect())
    }
}

/// Confirm flags that have held for `persistence` consecutive periods
/// ending at the current one.
fn confirm_runs(flags: &[bool], persistence: usize) -> Vec<bool> {
    let persistence = persistence.max(1);
    let mut run = 0usize;
    flags
        .iter()
        .map(|&flagged| {
            if flagged {
                run += 1;
            } else {
                run = 0;
            }
            flagged && run >= persistence
        })
        .collect()
}
