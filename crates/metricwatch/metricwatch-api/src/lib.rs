//! Metricwatch API
//!
//! Configuration types for seasonal decomposition and robust scoring.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use metricwatch_spi::{
    Alert, AlertSeverity, AnomalyRecord, DecompositionResult, Frequency, MetricPoint,
    MetricSeries, Result, WatchError,
};

// ============================================================================
// Decomposition Configuration
// ============================================================================

/// Seasonal decomposer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Number of trend/seasonal re-estimation passes (default: 3).
    pub passes: usize,
    /// Down-weight outlying points in later passes (default: true).
    pub robust: bool,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self {
            passes: 3,
            robust: true,
        }
    }
}

impl DecompositionConfig {
    pub fn new(passes: usize, robust: bool) -> Self {
        Self { passes, robust }
    }

    /// Check parameter sanity.
    pub fn validate(&self) -> Result<()> {
        if self.passes == 0 {
            return Err(WatchError::InvalidParameter {
                name: "passes".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Scoring Configuration
// ============================================================================

/// Robust scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Robust z-score threshold for the raw flag (default: 3.5).
    pub threshold: f64,
    /// Consecutive flagged periods required to confirm (default: 1).
    pub persistence: usize,
    /// Derive the threshold from the score spread, clamped to [3.0, 5.0]
    /// (default: false).
    pub adaptive_threshold: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            threshold: 3.5,
            persistence: 1,
            adaptive_threshold: false,
        }
    }
}

impl ScoringConfig {
    pub fn new(threshold: f64, persistence: usize) -> Self {
        Self {
            threshold,
            persistence,
            adaptive_threshold: false,
        }
    }

    /// Check parameter sanity.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0) {
            return Err(WatchError::InvalidParameter {
                name: "threshold".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.persistence == 0 {
            return Err(WatchError::InvalidParameter {
                name: "persistence".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Full per-run parameterization of the detection pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Seasonal cycle length in observations, e.g. 12 for monthly (default: 12).
    pub period: usize,
    /// Decomposition parameters.
    pub decomposition: DecompositionConfig,
    /// Scoring parameters.
    pub scoring: ScoringConfig,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            period: 12,
            decomposition: DecompositionConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl DetectorConfig {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Use the default cycle length for a reporting cadence.
    pub fn for_frequency(frequency: Frequency) -> Self {
        Self::new(frequency.default_period())
    }

    /// Check parameter sanity across all sections.
    pub fn validate(&self) -> Result<()> {
        if self.period < 2 {
            return Err(WatchError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        self.decomposition.validate()?;
        self.scoring.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposition_config_defaults() {
        let config = DecompositionConfig::default();
        assert_eq!(config.passes, 3);
        assert!(config.robust);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_decomposition_config_zero_passes() {
        let config = DecompositionConfig::new(0, true);
        assert!(matches!(
            config.validate(),
            Err(WatchError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_scoring_config_defaults() {
        let config = ScoringConfig::default();
        assert_eq!(config.threshold, 3.5);
        assert_eq!(config.persistence, 1);
        assert!(!config.adaptive_threshold);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_scoring_config_rejects_nonpositive_threshold() {
        assert!(ScoringConfig::new(0.0, 1).validate().is_err());
        assert!(ScoringConfig::new(-1.0, 1).validate().is_err());
        assert!(ScoringConfig::new(f64::NAN, 1).validate().is_err());
    }

    #[test]
    fn test_scoring_config_rejects_zero_persistence() {
        let config = ScoringConfig::new(3.5, 0);
        assert!(matches!(
            config.validate(),
            Err(WatchError::InvalidParameter { name, .. }) if name == "persistence"
        ));
    }

    #[test]
    fn test_detector_config_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.period, 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_detector_config_rejects_short_period() {
        assert!(DetectorConfig::new(0).validate().is_err());
        assert!(DetectorConfig::new(1).validate().is_err());
        assert!(DetectorConfig::new(2).validate().is_ok());
    }

    #[test]
    fn test_detector_config_for_frequency() {
        assert_eq!(DetectorConfig::for_frequency(Frequency::Daily).period, 7);
        assert_eq!(DetectorConfig::for_frequency(Frequency::Monthly).period, 12);
    }

    #[test]
    fn test_config_roundtrip_serialization() {
        let config = DetectorConfig::new(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: DetectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.period, 7);
        assert_eq!(back.scoring.threshold, config.scoring.threshold);
    }
}
