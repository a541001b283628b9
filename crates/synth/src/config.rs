//! Configuration for the AR(1) and AR(p) generators.

use crate::error::SynthError;
use crate::interval::Interval;

/// Configuration for [`generate_random_ar_1()`](crate::generate_random_ar_1).
///
/// # Example
///
/// ```
/// use argen_synth::Ar1Config;
///
/// let config = Ar1Config::new().with_seed(7).with_size(250);
/// assert_eq!(config.seed(), 7);
/// assert_eq!(config.size(), 250);
/// assert_eq!(config.vertical_shift(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ar1Config {
    seed: u64,
    vertical_shift: f64,
    size: usize,
    interval: Interval,
}

impl Ar1Config {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `seed = 1`, `vertical_shift = 10.0`, `size = 1000`,
    /// `interval = [-0.5, 0.5]`.
    pub fn new() -> Self {
        Self {
            seed: 1,
            vertical_shift: 10.0,
            size: 1000,
            interval: Interval::default(),
        }
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the constant added to every generated value.
    pub fn with_vertical_shift(mut self, shift: f64) -> Self {
        self.vertical_shift = shift;
        self
    }

    /// Sets the series length.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the coefficient draw interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    // --- Accessors ---

    /// Returns the RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the vertical shift.
    pub fn vertical_shift(&self) -> f64 {
        self.vertical_shift
    }

    /// Returns the series length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the coefficient draw interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Validates this configuration.
    ///
    /// Checks the interval and that the vertical shift is finite. A zero
    /// `size` is allowed and yields an empty series.
    pub fn validate(&self) -> Result<(), SynthError> {
        self.interval.validate()?;
        if !self.vertical_shift.is_finite() {
            return Err(SynthError::NonFiniteShift(self.vertical_shift));
        }
        Ok(())
    }
}

impl Default for Ar1Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for [`generate_ar_p_series()`](crate::generate_ar_p_series).
///
/// # Example
///
/// ```
/// use argen_synth::ArpConfig;
///
/// let config = ArpConfig::new(3).with_nsample(50).with_seed(42);
/// assert_eq!(config.p(), 3);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArpConfig {
    p: usize,
    nsample: usize,
    interval: Interval,
    seed: Option<u64>,
}

impl ArpConfig {
    /// Creates a configuration for an AR(`p`) series with defaults.
    ///
    /// Defaults: `nsample = 100`, `interval = [-0.5, 0.5]`, no seed.
    pub fn new(p: usize) -> Self {
        Self {
            p,
            nsample: 100,
            interval: Interval::default(),
            seed: None,
        }
    }

    /// Sets the series length.
    pub fn with_nsample(mut self, nsample: usize) -> Self {
        self.nsample = nsample;
        self
    }

    /// Sets the coefficient draw interval.
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the RNG seed. Without one, an OS-seeded generator is used.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Accessors ---

    /// Returns the AR order.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the series length.
    pub fn nsample(&self) -> usize {
        self.nsample
    }

    /// Returns the coefficient draw interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Returns the RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates this configuration.
    ///
    /// Checks that `p >= 1` and the interval is valid. A zero `nsample` is
    /// allowed and yields an empty series.
    pub fn validate(&self) -> Result<(), SynthError> {
        if self.p == 0 {
            return Err(SynthError::InvalidOrder { p: self.p });
        }
        self.interval.validate()
    }
}
