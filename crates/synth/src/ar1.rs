//! Shifted AR(1) generator.

use argen_arma::ArmaProcess;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::Ar1Config;
use crate::error::SynthError;
use crate::series::SyntheticSeries;

/// Generates a shifted AR(1) series with a randomly drawn coefficient.
///
/// Seeds a [`StdRng`] from `config.seed()`, so identical configs give
/// bit-identical series. See [`generate_random_ar_1_with_rng()`] for the
/// steps.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SynthError::InvalidInterval`] | non-finite bound or `low > high` |
/// | [`SynthError::NonFiniteShift`] | vertical shift is NaN or infinite |
///
/// # Example
///
/// ```
/// use argen_synth::{Ar1Config, generate_random_ar_1};
///
/// let config = Ar1Config::new().with_seed(1).with_vertical_shift(0.0).with_size(10);
/// let a = generate_random_ar_1(&config).unwrap();
/// let b = generate_random_ar_1(&config).unwrap();
/// assert_eq!(a.values(), b.values());
/// assert_eq!(a.len(), 10);
/// ```
#[tracing::instrument(skip(config), fields(seed = config.seed(), size = config.size()))]
pub fn generate_random_ar_1(config: &Ar1Config) -> Result<SyntheticSeries, SynthError> {
    let mut rng = StdRng::seed_from_u64(config.seed());
    generate_random_ar_1_with_rng(config, &mut rng)
}

/// Generates a shifted AR(1) series drawing from `rng`; `config.seed()` is
/// ignored.
///
/// 1. Draw one coefficient `c` uniformly from `config.interval()`.
/// 2. Build the process with AR polynomial `[1, c]` and MA polynomial `[1]`.
///    `c` is not negated, so the lag-1 weight of the realised process is `-c`.
/// 3. Sample `config.size()` values.
/// 4. Add `config.vertical_shift()` to every value.
pub fn generate_random_ar_1_with_rng<R: Rng>(
    config: &Ar1Config,
    rng: &mut R,
) -> Result<SyntheticSeries, SynthError> {
    config.validate()?;

    let coefficient = config.interval().sample_n(1, rng)?[0];
    debug!(coefficient, "drew AR(1) coefficient");

    let process = ArmaProcess::new(vec![1.0, coefficient], vec![1.0])?;
    let shift = config.vertical_shift();
    let values = process
        .generate_sample(config.size(), rng)
        .into_iter()
        .map(|y| y + shift)
        .collect();

    Ok(SyntheticSeries::new(values, process, shift))
}
