//! Detection pipeline: decompose, then score.

use metricwatch_api::DetectorConfig;
use metricwatch_spi::{
    AnomalyRecord, DecompositionResult, MetricSeries, ResidualScorer, Result, SeriesDecomposer,
};

use crate::decomposition::SeasonalDecomposer;
use crate::scoring::RobustScorer;

/// End-to-end seasonal anomaly detector.
///
/// Decomposes a regular metric series and scores its residuals in one
/// call. Pure and stateless: re-running on the same input yields the same
/// records.
#[derive(Debug, Clone)]
pub struct SeasonalAnomalyDetector {
    config: DetectorConfig,
    decomposer: SeasonalDecomposer,
    scorer: RobustScorer,
}

impl SeasonalAnomalyDetector {
    /// Create a detector after validating the configuration.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        let decomposer = SeasonalDecomposer::from_config(config.decomposition.clone());
        let scorer = RobustScorer::from_config(config.scoring.clone());
        Ok(Self {
            config,
            decomposer,
            scorer,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Decompose the series without scoring.
    pub fn decompose(&self, series: &MetricSeries) -> Result<DecompositionResult> {
        self.decomposer.decompose(series, self.config.period)
    }

    /// Decompose and score, producing one record per period.
    pub fn detect(&self, series: &MetricSeries) -> Result<Vec<AnomalyRecord>> {
        let decomposition = self.decompose(series)?;
        self.scorer.score(series, &decomposition)
    }
}

impl Default for SeasonalAnomalyDetector {
    fn default() -> Self {
        let config = DetectorConfig::default();
        Self {
            decomposer: SeasonalDecomposer::from_config(config.decomposition.clone()),
            scorer: RobustScorer::from_config(config.scoring.clone()),
            config,
        }
    }
}
