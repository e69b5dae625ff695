//! Z-score standardization
//!
//! Used to put coverage fractions and TF-IDF sums on a common scale before
//! they are blended.

use lexrank_core::{Error, Result};
use tracing::debug;

/// Standardize `data` to zero mean and unit population standard deviation
///
/// # Errors
///
/// - [`Error::EmptyVector`] if `data` is empty
/// - [`Error::ZeroVariance`] if every value is identical
pub fn z_score(data: &[f64]) -> Result<Vec<f64>> {
    let first = match data.first() {
        Some(v) => *v,
        None => return Err(Error::EmptyVector),
    };
    // Summing equal floats can leave a rounding residue in the mean, so
    // identical inputs are caught before the division.
    if data.iter().all(|v| *v == first) {
        return Err(Error::ZeroVariance);
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return Err(Error::ZeroVariance);
    }

    Ok(data.iter().map(|v| (v - mean) / std_dev).collect())
}

/// Standardize `data`, or hand it back unchanged if it cannot be
pub fn z_score_or_raw(data: Vec<f64>) -> Vec<f64> {
    match z_score(&data) {
        Ok(normalized) => normalized,
        Err(e) => {
            debug!(target: "lexrank::rank", error = %e, "Normalization skipped");
            data
        }
    }
}
