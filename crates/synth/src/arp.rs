//! AR(p) generator with random coefficients.

use argen_arma::ArmaProcess;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::ArpConfig;
use crate::error::SynthError;
use crate::series::SyntheticSeries;

/// Builds a seeded or OS-sourced RNG.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates an AR(p) series with randomly drawn coefficients.
///
/// With `config.seed()` set the series is reproducible; without it the
/// generator is seeded from the OS. See [`generate_ar_p_series_with_rng()`]
/// for the steps. No vertical shift is applied.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SynthError::InvalidOrder`] | `p == 0` |
/// | [`SynthError::InvalidInterval`] | non-finite bound or `low > high` |
///
/// # Example
///
/// ```
/// use argen_synth::{ArpConfig, generate_ar_p_series};
///
/// let series = generate_ar_p_series(&ArpConfig::new(2).with_nsample(50).with_seed(42)).unwrap();
/// assert_eq!(series.len(), 50);
/// assert_eq!(series.ar_params().len(), 3);
/// ```
#[tracing::instrument(skip(config), fields(p = config.p(), nsample = config.nsample(), seed = ?config.seed()))]
pub fn generate_ar_p_series(config: &ArpConfig) -> Result<SyntheticSeries, SynthError> {
    let mut rng = make_rng(config.seed());
    generate_ar_p_series_with_rng(config, &mut rng)
}

/// Generates an AR(p) series drawing from `rng`; `config.seed()` is ignored.
///
/// 1. Draw `p` coefficients uniformly from `config.interval()`.
/// 2. Negate them and prepend 1, giving the AR polynomial
///    `[1, -c_1, ..., -c_p]`, so `y[t] = c_1 y[t-1] + ... + c_p y[t-p] + e[t]`.
/// 3. Sample `config.nsample()` values with MA polynomial `[1]`.
pub fn generate_ar_p_series_with_rng<R: Rng>(
    config: &ArpConfig,
    rng: &mut R,
) -> Result<SyntheticSeries, SynthError> {
    config.validate()?;

    let drawn = config.interval().sample_n(config.p(), rng)?;
    debug!(coefficients = ?drawn, "drew AR(p) coefficients");

    let process = ArmaProcess::from_coeffs(&drawn, &[])?;
    if !process.is_stationary() {
        debug!("drawn AR polynomial is not stationary");
    }

    let values = process.generate_sample(config.nsample(), rng);
    Ok(SyntheticSeries::new(values, process, 0.0))
}
