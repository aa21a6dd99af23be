//! Robust statistic helpers.
//!
//! Median, MAD, and quartile estimators used by the decomposer and scorer.

/// Median of a sample.
///
/// Returns NaN for an empty sample.
pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Median absolute deviation about the median.
///
/// Returns NaN for an empty sample.
pub fn mad(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let center = median(data);
    let deviations: Vec<f64> = data.iter().map(|x| (x - center).abs()).collect();
    median(&deviations)
}

/// First and third quartiles.
///
/// Returns (NaN, NaN) for an empty sample.
pub fn quartiles(data: &[f64]) -> (f64, f64) {
    if data.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = sorted.len();
    (sorted[n / 4], sorted[3 * n / 4])
}

/// Interquartile range.
pub fn iqr(data: &[f64]) -> f64 {
    let (q1, q3) = quartiles(data);
    q3 - q1
}
