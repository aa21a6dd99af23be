//! Gap filling for irregular metric series.
//!
//! Decomposition requires one value per period; these policies make a
//! gapped series regular first.

use serde::{Deserialize, Serialize};

use metricwatch_spi::{MetricPoint, MetricSeries, Result, WatchError};

/// How to synthesize values for missing periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapFillPolicy {
    /// Repeat the last observed value
    CarryForward,
    /// Linear interpolation between the surrounding observations
    Interpolate,
    /// Fill with zero
    Zero,
}

/// Fill missing periods so the series has one value per `step`.
///
/// Observed timestamps must be strictly increasing and offset from each
/// other by whole multiples of `step`; anything else is an
/// `IrregularSeries` error. Already-regular series pass through unchanged.
pub fn fill_gaps(series: &MetricSeries, step: i64, policy: GapFillPolicy) -> Result<MetricSeries> {
    if step <= 0 {
        return Err(WatchError::InvalidParameter {
            name: "step".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let points = series.points();
    if points.len() < 2 {
        return Ok(series.clone());
    }

    let mut filled = Vec::with_capacity(points.len());
    for (i, pair) in points.windows(2).enumerate() {
        let (prev, next) = (pair[0], pair[1]);
        let delta = next.timestamp - prev.timestamp;
        if delta <= 0 || delta % step != 0 {
            return Err(WatchError::IrregularSeries {
                index: i + 1,
                expected: step,
                actual: delta,
            });
        }

        filled.push(prev);
        let missing = (delta / step - 1) as usize;
        for k in 1..=missing {
            let timestamp = prev.timestamp + step * k as i64;
            let value = match policy {
                GapFillPolicy::CarryForward => prev.value,
                GapFillPolicy::Zero => 0.0,
                GapFillPolicy::Interpolate => {
                    let fraction = k as f64 / (missing + 1) as f64;
                    prev.value + (next.value - prev.value) * fraction
                }
            };
            filled.push(MetricPoint::new(timestamp, value));
        }
    }
    filled.push(points[points.len() - 1]);

    Ok(MetricSeries::new(filled))
}
