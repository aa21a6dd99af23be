//! Basic example demonstrating seasonal anomaly detection
//!
//! Run with: cargo run --example basic -p metricwatch

use metricwatch::{
    build_alerts, AnomalyRecord, DetectorConfig, Frequency, MetricSeries,
    SeasonalAnomalyDetector,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== metricwatch Basic Example ===\n");

    // Two years of monthly revenue with seasonality, drift, and one spike
    let seasonal = [0.0, -4.0, 2.0, 5.0, 8.0, 12.0, 15.0, 13.0, 6.0, 1.0, -3.0, 20.0];
    let mut values: Vec<f64> = (0..24)
        .map(|i| 100.0 + 0.5 * i as f64 + seasonal[i % 12])
        .collect();
    values[17] += 60.0; // unexplained jump in month 18

    let series = MetricSeries::from_values(1_672_531_200, 2_592_000, &values);
    println!("Monthly values: {:?}\n", values.iter().map(|v| format!("{:.1}", v)).collect::<Vec<_>>());

    // 1. Decompose into trend + seasonal + residual
    let detector =
        SeasonalAnomalyDetector::new(DetectorConfig::for_frequency(Frequency::Monthly))?;
    let decomposition = detector.decompose(&series)?;
    println!("1. Decomposition (month 18)");
    println!("   trend={:.2}", decomposition.trend[17]);
    println!("   seasonal={:.2}", decomposition.seasonal[17]);
    println!("   residual={:.2}\n", decomposition.residual[17]);

    // 2. Score and flag
    let records = detector.detect(&series)?;
    println!("2. Flagged months");
    for i in AnomalyRecord::anomaly_indices(&records) {
        let r = &records[i];
        println!(
            "   month {:2}: value={:.1} expected={:.1} robust_z={:.2} confirmed={}",
            i + 1,
            r.value,
            r.expected,
            r.robust_z,
            r.confirmed
        );
    }

    // 3. Build an alert digest from confirmed records
    let alerts = build_alerts(&records);
    println!("\n3. Alerts");
    for alert in &alerts {
        println!("   [{:?}] {}", alert.severity, alert.message);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
