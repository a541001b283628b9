//! Error types for the argen-synth crate.

use argen_arma::ArmaError;

/// Error type for all fallible operations in the argen-synth crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    /// Returned when an interval bound is non-finite, `low > high`, or the
    /// width `high - low` overflows.
    #[error(
        "invalid coefficient interval [{low}, {high}]: bounds must be finite with low <= high and a finite width"
    )]
    InvalidInterval {
        /// Lower bound supplied.
        low: f64,
        /// Upper bound supplied.
        high: f64,
    },

    /// Returned when the AR order is zero.
    #[error("AR order must be at least 1, got {p}")]
    InvalidOrder {
        /// Order supplied.
        p: usize,
    },

    /// Returned when the vertical shift is NaN or infinite.
    #[error("vertical shift must be finite, got {0}")]
    NonFiniteShift(f64),

    /// Propagated from ARMA process construction.
    #[error(transparent)]
    Arma(#[from] ArmaError),
}
