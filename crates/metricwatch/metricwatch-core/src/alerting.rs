//! Alert assembly from confirmed anomaly records.

use metricwatch_spi::{Alert, AlertSeverity, AnomalyRecord};

// Scores beyond this are critical rather than warnings
const CRITICAL_SCORE: f64 = 5.0;

/// Build an alert for a single record.
pub fn build_alert(record: &AnomalyRecord) -> Alert {
    let severity = if record.robust_z.abs() > CRITICAL_SCORE {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    };

    let message = format!(
        "Anomaly detected: value={:.4}, expected={:.4}, score={:.4}",
        record.value, record.expected, record.robust_z
    );

    Alert {
        timestamp: record.timestamp,
        value: record.value,
        expected: record.expected,
        robust_z: record.robust_z,
        severity,
        message,
    }
}

/// Build alerts for every confirmed record, in order.
pub fn build_alerts(records: &[AnomalyRecord]) -> Vec<Alert> {
    records
        .iter()
        .filter(|r| r.confirmed)
        .map(build_alert)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(robust_z: f64, confirmed: bool) -> AnomalyRecord {
        AnomalyRecord {
            timestamp: 1704067200,
            value: 500.0,
            expected: 100.0,
            residual: 400.0,
            robust_z,
            anomaly: confirmed,
            confirmed,
        }
    }

    #[test]
    fn test_warning_severity() {
        let alert = build_alert(&record(4.0, true));
        assert_eq!(alert.severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_critical_severity() {
        let alert = build_alert(&record(8.2, true));
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_critical_severity_negative_score() {
        let alert = build_alert(&record(-8.2, true));
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_message_contents() {
        let alert = build_alert(&record(8.2, true));
        assert!(alert.message.contains("value=500.0000"));
        assert!(alert.message.contains("expected=100.0000"));
        assert!(alert.message.contains("score=8.2000"));
    }

    #[test]
    fn test_only_confirmed_records_alert() {
        let records = vec![record(8.0, false), record(6.0, true), record(4.0, true)];
        let alerts = build_alerts(&records);
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].robust_z, 6.0);
        assert_eq!(alerts[1].robust_z, 4.0);
    }

    #[test]
    fn test_no_confirmed_no_alerts() {
        let records = vec![record(8.0, false)];
        assert!(build_alerts(&records).is_empty());
    }
}
