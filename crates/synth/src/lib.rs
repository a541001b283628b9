//! # argen-synth
//!
//! Random autoregressive series for testing and demonstration.
//!
//! | Function | Process | Shift |
//! |----------|---------|-------|
//! | [`generate_random_ar_1()`] | AR polynomial `[1, c]`, `c ~ U[low, high]` | `vertical_shift` added |
//! | [`generate_ar_p_series()`] | AR polynomial `[1, -c_1, ..., -c_p]` | none |
//! | [`generate_shifts()`] | placeholder, returns `0.0` | n/a |
//!
//! Every generator owns or borrows an explicit RNG. Seeded calls are
//! reproducible and independent of any other randomness in the process.
//!
//! ```
//! use argen_synth::{Ar1Config, ArpConfig, generate_ar_p_series, generate_random_ar_1};
//!
//! let ar1 = generate_random_ar_1(&Ar1Config::new().with_size(100)).unwrap();
//! assert_eq!(ar1.len(), 100);
//!
//! let arp = generate_ar_p_series(&ArpConfig::new(3).with_seed(42)).unwrap();
//! assert_eq!(arp.ar_params()[0], 1.0);
//! ```

mod ar1;
mod arp;
mod config;
mod error;
mod interval;
mod series;
mod shifts;

pub use ar1::{generate_random_ar_1, generate_random_ar_1_with_rng};
pub use arp::{generate_ar_p_series, generate_ar_p_series_with_rng};
pub use config::{Ar1Config, ArpConfig};
pub use error::SynthError;
pub use interval::Interval;
pub use series::SyntheticSeries;
pub use shifts::generate_shifts;
