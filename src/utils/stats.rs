//! Aggregates over a sequence of samples.

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Sample standard deviation with Bessel's correction (denominator `n - 1`).
///
/// Returns `None` when fewer than two samples are given, since the estimator
/// is undefined there.
pub fn stddev(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }

    // Welford's running update avoids the cancellation of E[x^2] - E[x]^2.
    let mut count = 0.0;
    let mut running_mean = 0.0;
    let mut m2 = 0.0;
    for &x in data {
        count += 1.0;
        let delta = x - running_mean;
        running_mean += delta / count;
        m2 += delta * (x - running_mean);
    }
    Some((m2 / (count - 1.0)).sqrt())
}
