//! Per-period anomaly record.

use serde::{Deserialize, Serialize};

/// Scored result for one period of a metric series.
///
/// One record per input period, in input order. `anomaly` is the raw
/// threshold flag; `confirmed` additionally requires the flag to hold for
/// the configured number of consecutive periods ending at this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyRecord {
    /// Unix timestamp of the period
    pub timestamp: i64,
    /// Observed value
    pub value: f64,
    /// Expected value (trend + seasonal)
    pub expected: f64,
    /// Unexplained remainder (value - expected)
    pub residual: f64,
    /// Robust z-score of the residual
    pub robust_z: f64,
    /// Raw threshold flag
    pub anomaly: bool,
    /// Persistence-confirmed flag
    pub confirmed: bool,
}

impl AnomalyRecord {
    /// Indices of raw-flagged records.
    pub fn anomaly_indices(records: &[AnomalyRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| if r.anomaly { Some(i) } else { None })
            .collect()
    }

    /// Indices of persistence-confirmed records.
    pub fn confirmed_indices(records: &[AnomalyRecord]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| if r.confirmed { Some(i) } else { None })
            .collect()
    }

    /// Count of raw-flagged records.
    pub fn anomaly_count(records: &[AnomalyRecord]) -> usize {
        records.iter().filter(|r| r.anomaly).count()
    }

    /// Count of persistence-confirmed records.
    pub fn confirmed_count(records: &[AnomalyRecord]) -> usize {
        records.iter().filter(|r| r.confirmed).count()
    }
}
