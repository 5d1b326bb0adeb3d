//! Block-level statistics for microphone samples.

/// Mean of `samples`, truncated toward zero.
///
/// Returns 0 for an empty slice.
#[inline]
pub fn truncated_mean(samples: &[u16]) -> u16 {
    if samples.is_empty() {
        return 0;
    }
    let sum: u64 = samples.iter().map(|&s| s as u64).sum();
    (sum / samples.len() as u64) as u16
}

/// RMS deviation of `samples` from their (truncated) mean.
///
/// Computes `sqrt(sum((x - mean)^2) / len)`. The mean is truncated to an
/// integer before the deviations are taken; the squares are accumulated in
/// `f64`. Returns 0.0 for an empty slice.
pub fn normalized_rms(samples: &[u16]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let mean = truncated_mean(samples) as f64;
    let sum_sq: f64 = samples
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum();
    libm::sqrt(sum_sq / samples.len() as f64) as f32
}
