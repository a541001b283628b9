//! Placeholder for generating shifted copies of a series.

use tracing::warn;

/// Placeholder for generating shifted copies of a series.
///
/// Not implemented: always returns `0.0`, whatever `series` and `n_series`
/// are.
pub fn generate_shifts(series: &[f64], n_series: usize) -> f64 {
    warn!(
        len = series.len(),
        n_series, "generate_shifts is not implemented, returning 0"
    );
    0.0
}
