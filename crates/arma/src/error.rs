//! Error types for the argen-arma crate.

/// Error type for all fallible operations in the argen-arma crate.
///
/// Covers malformed lag polynomials and invalid sampling options.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArmaError {
    /// Returned when an AR or MA lag polynomial has no coefficients.
    #[error("{which} lag polynomial is empty")]
    EmptyPolynomial {
        /// Which polynomial was empty (`"AR"` or `"MA"`).
        which: &'static str,
    },

    /// Returned when the zero-lag AR coefficient is zero, which makes the
    /// recursion undefined.
    #[error("zero-lag AR coefficient must be non-zero")]
    ZeroLeadingCoefficient,

    /// Returned when a coefficient is NaN or infinite.
    #[error("{which} coefficient at lag {lag} is not finite: {value}")]
    NonFiniteCoefficient {
        /// Which polynomial holds the coefficient (`"AR"` or `"MA"`).
        which: &'static str,
        /// Lag index of the offending coefficient.
        lag: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the innovation scale is not finite and positive.
    #[error("innovation scale must be finite and positive, got {0}")]
    InvalidScale(f64),

    /// Returned when `nsample + burnin` does not fit in `usize`.
    #[error("sample length overflows: nsample={nsample}, burnin={burnin}")]
    LengthOverflow {
        /// Requested number of retained values.
        nsample: usize,
        /// Requested burn-in length.
        burnin: usize,
    },
}
