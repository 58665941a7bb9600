//! Sample statistics for timing comparisons.

pub mod welch;

pub use welch::{welch_t_test, WelchTTest};

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (n - 1 denominator). Callers must supply at
/// least two samples.
pub fn sample_variance(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() as f64 - 1.0)
}
