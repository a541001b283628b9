//! Sample-path generation by direct-form filtering of Gaussian innovations.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::ArmaError;

/// Options controlling sample-path generation.
///
/// # Example
///
/// ```
/// use argen_arma::SampleOptions;
///
/// let options = SampleOptions::new().with_scale(2.0).with_burnin(100);
/// assert_eq!(options.scale(), 2.0);
/// assert_eq!(options.burnin(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleOptions {
    scale: f64,
    burnin: usize,
}

impl SampleOptions {
    /// Creates options with defaults: `scale = 1.0`, `burnin = 0`.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            burnin: 0,
        }
    }

    /// Sets the innovation standard deviation.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the number of leading values generated and then discarded.
    pub fn with_burnin(mut self, burnin: usize) -> Self {
        self.burnin = burnin;
        self
    }

    /// Returns the innovation standard deviation.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the burn-in length.
    pub fn burnin(&self) -> usize {
        self.burnin
    }

    /// Validates these options.
    ///
    /// # Errors
    ///
    /// Returns [`ArmaError::InvalidScale`] unless `scale` is finite and
    /// positive.
    pub fn validate(&self) -> Result<(), ArmaError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ArmaError::InvalidScale(self.scale));
        }
        Ok(())
    }

    /// Returns the number of values generated for `nsample` retained values,
    /// burn-in included.
    ///
    /// # Errors
    ///
    /// Returns [`ArmaError::LengthOverflow`] if `nsample + burnin` overflows.
    pub fn total_len(&self, nsample: usize) -> Result<usize, ArmaError> {
        nsample
            .checked_add(self.burnin)
            .ok_or(ArmaError::LengthOverflow {
                nsample,
                burnin: self.burnin,
            })
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Filters `nsample + burnin` scaled standard-normal innovations through
/// `ma(L) / ar(L)` with zero initial conditions and returns the values after
/// the burn-in.
///
/// Expects `ar` and `ma` to be non-empty with `ar[0] != 0`, `options`
/// validated and [`SampleOptions::total_len()`] checked for `nsample`.
pub(crate) fn filter_path<R: Rng>(
    ar: &[f64],
    ma: &[f64],
    nsample: usize,
    options: &SampleOptions,
    rng: &mut R,
) -> Vec<f64> {
    if nsample == 0 {
        return Vec::new();
    }

    let n_tot = options.burnin + nsample;
    let eps: Vec<f64> = (0..n_tot)
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            options.scale * z
        })
        .collect();

    let mut y = vec![0.0; n_tot];
    for t in 0..n_tot {
        let mut val = 0.0;
        // MA part, including the contemporaneous term
        for (j, &m) in ma.iter().enumerate() {
            if t >= j {
                val += m * eps[t - j];
            }
        }
        // AR part
        for (i, &a) in ar.iter().enumerate().skip(1) {
            if t >= i {
                val -= a * y[t - i];
            }
        }
        y[t] = val / ar[0];
    }

    y.split_off(options.burnin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;

    fn draw_noise(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        (0..n).map(|_| StandardNormal.sample(&mut rng)).collect()
    }

    #[test]
    fn defaults() {
        let options = SampleOptions::default();
        assert_eq!(options.scale(), 1.0);
        assert_eq!(options.burnin(), 0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn validate_scale() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(SampleOptions::new().with_scale(bad).validate().is_err());
        }
    }

    #[test]
    fn total_len_adds_burnin() {
        let options = SampleOptions::new().with_burnin(25);
        assert_eq!(options.total_len(100), Ok(125));
    }

    #[test]
    fn total_len_overflow() {
        let options = SampleOptions::new().with_burnin(usize::MAX);
        assert_eq!(
            options.total_len(1),
            Err(ArmaError::LengthOverflow {
                nsample: 1,
                burnin: usize::MAX
            })
        );
    }

    #[test]
    fn white_noise_is_the_innovations() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let y = filter_path(&[1.0], &[1.0], 20, &SampleOptions::default(), &mut rng);
        assert_eq!(y, draw_noise(20, 5));
    }

    #[test]
    fn ar1_recursion_matches_hand_filter() {
        let phi = 0.6;
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let y = filter_path(&[1.0, -phi], &[1.0], 30, &SampleOptions::default(), &mut rng);

        let eps = draw_noise(30, 11);
        let mut expected = vec![0.0; 30];
        expected[0] = eps[0];
        for t in 1..30 {
            expected[t] = phi * expected[t - 1] + eps[t];
        }
        for (a, b) in y.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn ma1_recursion_matches_hand_filter() {
        let theta = 0.4;
        let mut rng = rand::rngs::StdRng::seed_from_u64(12);
        let y = filter_path(&[1.0], &[1.0, theta], 30, &SampleOptions::default(), &mut rng);

        let eps = draw_noise(30, 12);
        assert_abs_diff_eq!(y[0], eps[0], epsilon = 1e-12);
        for t in 1..30 {
            assert_abs_diff_eq!(y[t], eps[t] + theta * eps[t - 1], epsilon = 1e-12);
        }
    }

    #[test]
    fn leading_coefficient_normalises() {
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(3);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(3);
        let a = filter_path(&[2.0, -1.0], &[2.0], 25, &SampleOptions::default(), &mut rng1);
        let b = filter_path(&[1.0, -0.5], &[1.0], 25, &SampleOptions::default(), &mut rng2);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_abs_diff_eq!(x, y, epsilon = 1e-12);
        }
    }

    #[test]
    fn scale_multiplies_white_noise() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(8);
        let options = SampleOptions::new().with_scale(3.0);
        let y = filter_path(&[1.0], &[1.0], 10, &options, &mut rng);
        let eps = draw_noise(10, 8);
        for (a, b) in y.iter().zip(eps.iter()) {
            assert_abs_diff_eq!(*a, 3.0 * b, epsilon = 1e-12);
        }
    }

    #[test]
    fn burnin_discards_leading_values() {
        let options = SampleOptions::new().with_burnin(15);
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(21);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(21);
        let with_burnin = filter_path(&[1.0, -0.5], &[1.0], 40, &options, &mut rng1);
        let full = filter_path(&[1.0, -0.5], &[1.0], 55, &SampleOptions::default(), &mut rng2);
        assert_eq!(with_burnin.len(), 40);
        assert_eq!(with_burnin.as_slice(), &full[15..]);
    }

    #[test]
    fn zero_length() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let options = SampleOptions::new().with_burnin(10);
        assert!(filter_path(&[1.0, -0.5], &[1.0], 0, &options, &mut rng).is_empty());
    }
}
