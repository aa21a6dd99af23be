//! Alert types for confirmed anomalies.

use serde::{Deserialize, Serialize};

/// Alert severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

/// An alert built from a confirmed anomaly record.
///
/// Construction only; delivery is a downstream concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub timestamp: i64,
    pub value: f64,
    pub expected: f64,
    pub robust_z: f64,
    pub severity: AlertSeverity,
    pub message: String,
}
