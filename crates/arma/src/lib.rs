//! # argen-arma
//!
//! ARMA(p,q) processes in lag-polynomial form and Gaussian sample-path
//! generation.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArmaProcess::new(ar, ma)?"] --> B["ArmaProcess"]
//!     C["ArmaProcess::from_coeffs(&phi, &theta)?"] --> B
//!     B --> D[".generate_sample(n, &mut rng)"]
//!     B --> E[".generate_sample_with(n, &options, &mut rng)?"]
//!     B --> F[".generate_samples(n, n_paths, &options, &mut rng)?"]
//!     B --> G[".is_stationary() / .is_invertible()"]
//! ```
//!
//! ## Sign Convention
//!
//! | Form | AR(1) with `y[t] = 0.5 y[t-1] + e[t]` |
//! |------|---------------------------------------|
//! | Lag polynomial ([`ArmaProcess::ar()`]) | `[1.0, -0.5]` |
//! | Regression ([`ArmaProcess::arcoefs()`]) | `[0.5]` |

mod error;
mod process;
mod sample;

pub(crate) mod params;

pub use error::ArmaError;
pub use process::ArmaProcess;
pub use sample::SampleOptions;
