//! Closed interval from which AR coefficients are drawn.

use rand::Rng;
use rand::distr::{Distribution, Uniform};

use crate::error::SynthError;

/// A closed interval `[low, high]` for uniform coefficient draws.
///
/// The default is `[-0.5, 0.5]`.
///
/// # Example
///
/// ```
/// use argen_synth::Interval;
///
/// let interval = Interval::new(-0.9, 0.9);
/// assert!(interval.validate().is_ok());
/// assert!(Interval::new(1.0, -1.0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval. Bounds are checked by [`Interval::validate()`].
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns the lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Checks that both bounds are finite, `low <= high` and the width
    /// `high - low` is finite.
    pub fn validate(&self) -> Result<(), SynthError> {
        if !self.low.is_finite()
            || !self.high.is_finite()
            || self.low > self.high
            || !(self.high - self.low).is_finite()
        {
            return Err(SynthError::InvalidInterval {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Draws `n` independent values uniformly from the interval.
    ///
    /// A degenerate interval (`low == high`) yields `n` copies of `low`.
    pub fn sample_n<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, SynthError> {
        self.validate()?;
        let uniform =
            Uniform::new_inclusive(self.low, self.high).map_err(|_| SynthError::InvalidInterval {
                low: self.low,
                high: self.high,
            })?;
        Ok((0..n).map(|_| uniform.sample(rng)).collect())
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}

impl From<[f64; 2]> for Interval {
    fn from([low, high]: [f64; 2]) -> Self {
        Self::new(low, high)
    }
}
