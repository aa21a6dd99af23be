//! Seasonal-trend decomposition.
//!
//! Additive model: value = trend + seasonal + residual.

use metricwatch_api::DecompositionConfig;
use metricwatch_spi::{
    DecompositionResult, MetricSeries, Result, SeriesDecomposer, WatchError,
};

use crate::stats::{mad, median};

// Weight sums below this are treated as no evidence
const WEIGHT_FLOOR: f64 = 1e-12;

/// Additive seasonal-trend decomposer.
///
/// Estimates the trend with a centered moving average, the seasonal
/// component as the mean detrended value per cycle position (re-centered
/// to zero mean over a cycle), and the residual by exact subtraction.
///
/// In robust mode the trend and seasonal fits are re-estimated over
/// `passes` iterations with bisquare weights derived from the previous
/// pass's residuals, so isolated outliers stop contaminating the fit.
#[derive(Debug, Clone)]
pub struct SeasonalDecomposer {
    passes: usize,
    robust: bool,
}

impl SeasonalDecomposer {
    /// Create a decomposer with explicit iteration settings.
    pub fn new(passes: usize, robust: bool) -> Self {
        Self { passes, robust }
    }

    /// Create from configuration.
    pub fn from_config(config: DecompositionConfig) -> Self {
        Self::new(config.passes, config.robust)
    }
}

impl Default for SeasonalDecomposer {
    fn default() -> Self {
        Self::from_config(DecompositionConfig::default())
    }
}

impl SeriesDecomposer for SeasonalDecomposer {
    fn decompose(&self, series: &MetricSeries, period: usize) -> Result<DecompositionResult> {
        if period < 2 {
            return Err(WatchError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        series.check_regular()?;

        let values = series.values();
        let n = values.len();
        if n < 2 * period {
            return Err(WatchError::InsufficientData {
                required: 2 * period,
                actual: n,
            });
        }

        // Odd window keeps the moving average centered for even periods
        let window = if period % 2 == 0 { period + 1 } else { period };
        let passes = if self.robust { self.passes.max(1) } else { 1 };

        let mut weights = vec![1.0; n];
        let mut result = estimate_components(&values, &weights, window, period);
        for _ in 1..passes {
            update_robustness_weights(&mut weights, &result.residual);
            result = estimate_components(&values, &weights, window, period);
        }

        Ok(result)
    }
}

/// One fitting pass: weighted trend, weighted seasonal, exact residual.
fn estimate_components(
    values: &[f64],
    weights: &[f64],
    window: usize,
    period: usize,
) -> DecompositionResult {
    let trend = weighted_moving_average(values, weights, window);

    let detrended: Vec<f64> = values
        .iter()
        .zip(trend.iter())
        .map(|(v, t)| v - t)
        .collect();
    let seasonal = seasonal_component(&detrended, weights, period);

    let residual: Vec<f64> = values
        .iter()
        .zip(trend.iter())
        .zip(seasonal.iter())
        .map(|((v, t), s)| v - t - s)
        .collect();

    DecompositionResult {
        trend,
        seasonal,
        residual,
    }
}

/// Centered weighted moving average with edge replication.
fn weighted_moving_average(values: &[f64], weights: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let half = window / 2;
    let mut trend = vec![0.0; n];

    for i in half..(n - half) {
        let lo = i - half;
        let hi = i + half;
        let weight_sum: f64 = weights[lo..=hi].iter().sum();
        if weight_sum > WEIGHT_FLOOR {
            let value_sum: f64 = values[lo..=hi]
                .iter()
                .zip(weights[lo..=hi].iter())
                .map(|(v, w)| v * w)
                .sum();
            trend[i] = value_sum / weight_sum;
        } else {
            // Every point in the window is down-weighted; the trend still
            // has to exist, so fall back to the plain mean
            let value_sum: f64 = values[lo..=hi].iter().sum();
            trend[i] = value_sum / window as f64;
        }
    }

    // Extend trend at edges
    for i in 0..half {
        trend[i] = trend[half];
    }
    for i in (n - half)..n {
        trend[i] = trend[n - half - 1];
    }

    trend
}

/// Weighted mean of detrended values per cycle position, re-centered so
/// each full cycle averages to zero.
fn seasonal_component(detrended: &[f64], weights: &[f64], period: usize) -> Vec<f64> {
    let n = detrended.len();
    let mut position_means = vec![0.0; period];

    for (pos, mean) in position_means.iter_mut().enumerate() {
        let mut weight_sum = 0.0;
        let mut value_sum = 0.0;
        for j in (pos..n).step_by(period) {
            weight_sum += weights[j];
            value_sum += detrended[j] * weights[j];
        }
        // No reliable observation at this position: no seasonal evidence
        *mean = if weight_sum > WEIGHT_FLOOR {
            value_sum / weight_sum
        } else {
            0.0
        };
    }

    let cycle_mean: f64 = position_means.iter().sum::<f64>() / period as f64;
    for mean in position_means.iter_mut() {
        *mean -= cycle_mean;
    }

    (0..n).map(|i| position_means[i % period]).collect()
}

/// Bisquare robustness weights from the previous pass's residuals.
///
/// Left unchanged when the residual spread is already negligible.
fn update_robustness_weights(weights: &mut [f64], residual: &[f64]) {
    let center = median(residual);
    let cutoff = 6.0 * mad(residual);
    if !(cutoff > WEIGHT_FLOOR) {
        return;
    }
    for (w, r) in weights.iter_mut().zip(residual.iter()) {
        let u = (r - center) / cutoff;
        *w = if u.abs() < 1.0 {
            let t = 1.0 - u * u;
            t * t
        } else {
            0.0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metricwatch_spi::MetricPoint;

    const DAY: i64 = 86_400;

    fn seasonal_series(cycles: usize, period: usize) -> MetricSeries {
        let pattern: Vec<f64> = (0..period).map(|p| (p as f64) * 2.0 - period as f64).collect();
        let values: Vec<f64> = (0..cycles * period)
            .map(|i| 100.0 + 0.5 * i as f64 + pattern[i % period])
            .collect();
        MetricSeries::from_values(0, DAY, &values)
    }

    #[test]
    fn test_rejects_short_period() {
        let series = MetricSeries::from_values(0, DAY, &[1.0; 24]);
        let result = SeasonalDecomposer::default().decompose(&series, 1);
        assert!(matches!(result, Err(WatchError::InvalidParameter { .. })));
    }

    #[test]
    fn test_rejects_insufficient_data() {
        let series = MetricSeries::from_values(0, DAY, &[1.0; 10]);
        let result = SeasonalDecomposer::default().decompose(&series, 12);
        match result {
            Err(WatchError::InsufficientData { required, actual }) => {
                assert_eq!(required, 24);
                assert_eq!(actual, 10);
            }
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_irregular_series() {
        let mut points: Vec<MetricPoint> = (0..24)
            .map(|i| MetricPoint::new(i as i64 * DAY, 100.0))
            .collect();
        points[10].timestamp += 3600;
        let series = MetricSeries::new(points);
        let result = SeasonalDecomposer::default().decompose(&series, 4);
        assert!(matches!(result, Err(WatchError::IrregularSeries { .. })));
    }

    #[test]
    fn test_component_lengths() {
        let series = seasonal_series(4, 6);
        let result = SeasonalDecomposer::default().decompose(&series, 6).unwrap();
        assert_eq!(result.trend.len(), 24);
        assert_eq!(result.seasonal.len(), 24);
        assert_eq!(result.residual.len(), 24);
    }

    #[test]
    fn test_additive_identity_exact() {
        let series = seasonal_series(5, 12);
        let values = series.values();
        let result = SeasonalDecomposer::default().decompose(&series, 12).unwrap();

        for (i, &v) in values.iter().enumerate() {
            let reconstructed = result.trend[i] + result.seasonal[i] + result.residual[i];
            assert!(
                (v - reconstructed).abs() < 1e-9,
                "identity broken at {}: {} vs {}",
                i,
                v,
                reconstructed
            );
        }
    }

    #[test]
    fn test_seasonal_zero_mean_over_cycle() {
        let series = seasonal_series(4, 6);
        let result = SeasonalDecomposer::default().decompose(&series, 6).unwrap();

        for cycle in result.seasonal.chunks(6) {
            let mean: f64 = cycle.iter().sum::<f64>() / cycle.len() as f64;
            assert!(mean.abs() < 1e-9, "cycle mean {} not zero", mean);
        }
    }

    #[test]
    fn test_constant_series_decomposes_to_flat_trend() {
        let series = MetricSeries::from_values(0, DAY, &[50.0; 28]);
        let result = SeasonalDecomposer::default().decompose(&series, 7).unwrap();

        for i in 0..28 {
            assert!((result.trend[i] - 50.0).abs() < 1e-9);
            assert!(result.seasonal[i].abs() < 1e-9);
            assert!(result.residual[i].abs() < 1e-9);
        }
    }

    #[test]
    fn test_linear_trend_recovered() {
        let values: Vec<f64> = (0..36).map(|i| 10.0 + 3.0 * i as f64).collect();
        let series = MetricSeries::from_values(0, DAY, &values);
        let result = SeasonalDecomposer::new(1, false).decompose(&series, 6).unwrap();

        // Away from the edges the centered average reproduces the line
        for i in 3..33 {
            assert!(
                (result.trend[i] - values[i]).abs() < 1e-9,
                "trend off at {}",
                i
            );
        }
    }

    #[test]
    fn test_seasonal_pattern_recovered() {
        let series = seasonal_series(6, 4);
        let result = SeasonalDecomposer::default().decompose(&series, 4).unwrap();

        // The same position in different cycles carries the same seasonal value
        for pos in 0..4 {
            let first = result.seasonal[pos];
            for cycle in 1..6 {
                assert!((result.seasonal[cycle * 4 + pos] - first).abs() < 1e-9);
            }
        }
        // And interior residuals are small for noise-free data
        for i in 4..20 {
            assert!(result.residual[i].abs() < 1.0, "residual {} at {}", result.residual[i], i);
        }
    }

    #[test]
    fn test_robust_mode_isolates_single_spike() {
        let mut values = vec![100.0; 24];
        values[17] = 500.0;
        let series = MetricSeries::from_values(0, DAY, &values);
        let result = SeasonalDecomposer::default().decompose(&series, 12).unwrap();

        // The spike lands in the residual, not in trend or seasonal
        assert!(result.residual[17] > 300.0);
        for i in 0..24 {
            if i != 17 {
                assert!(
                    result.residual[i].abs() < 1.0,
                    "clean point {} has residual {}",
                    i,
                    result.residual[i]
                );
            }
        }
    }

    #[test]
    fn test_non_robust_single_pass_matches_repeated_passes() {
        let series = seasonal_series(4, 6);
        let one = SeasonalDecomposer::new(1, false).decompose(&series, 6).unwrap();
        let five = SeasonalDecomposer::new(5, false).decompose(&series, 6).unwrap();
        assert_eq!(one, five);
    }

    #[test]
    fn test_decompose_is_idempotent() {
        let series = seasonal_series(3, 12);
        let decomposer = SeasonalDecomposer::default();
        let a = decomposer.decompose(&series, 12).unwrap();
        let b = decomposer.decompose(&series, 12).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_odd_period_window() {
        let series = seasonal_series(4, 7);
        let result = SeasonalDecomposer::default().decompose(&series, 7).unwrap();
        assert_eq!(result.len(), 28);
    }

    #[test]
    fn test_from_config() {
        let config = DecompositionConfig::new(2, false);
        let decomposer = SeasonalDecomposer::from_config(config);
        let series = seasonal_series(3, 4);
        assert!(decomposer.decompose(&series, 4).is_ok());
    }
}
