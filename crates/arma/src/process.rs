//! ARMA process defined by its AR and MA lag polynomials.

use ndarray::Array2;
use rand::Rng;
use tracing::debug;

use crate::error::ArmaError;
use crate::params;
use crate::sample::{self, SampleOptions};

/// An ARMA(p,q) process in lag-polynomial form.
///
/// `ar = [a0, a1, ..., ap]` and `ma = [m0, m1, ..., mq]` describe
///
/// ```text
/// a0 y[t] + a1 y[t-1] + ... + ap y[t-p] = m0 e[t] + m1 e[t-1] + ... + mq e[t-q]
/// ```
///
/// Both vectors include the zero-lag term, so an AR(1) process with
/// `y[t] = 0.5 y[t-1] + e[t]` is `ar = [1, -0.5]`, `ma = [1]`. Use
/// [`ArmaProcess::from_coeffs()`] to build from the regression-form signs.
///
/// # Example
///
/// ```
/// use argen_arma::ArmaProcess;
///
/// let process = ArmaProcess::new(vec![1.0, -0.5], vec![1.0]).unwrap();
/// assert_eq!(process.ar_order(), 1);
/// assert_eq!(process.arcoefs(), vec![0.5]);
/// assert!(process.is_stationary());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArmaProcess {
    ar: Vec<f64>,
    ma: Vec<f64>,
}

impl ArmaProcess {
    /// Creates a process from lag-polynomial coefficients.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArmaError::EmptyPolynomial`] | `ar` or `ma` is empty |
    /// | [`ArmaError::NonFiniteCoefficient`] | any coefficient is NaN or infinite |
    /// | [`ArmaError::ZeroLeadingCoefficient`] | `ar[0] == 0` |
    pub fn new(ar: Vec<f64>, ma: Vec<f64>) -> Result<Self, ArmaError> {
        check_polynomial(&ar, "AR")?;
        check_polynomial(&ma, "MA")?;
        if ar[0] == 0.0 {
            return Err(ArmaError::ZeroLeadingCoefficient);
        }
        Ok(Self { ar, ma })
    }

    /// Creates a process from regression-form coefficients
    /// (`y[t] = sum phi[i] y[t-1-i] + e[t] + sum theta[j] e[t-1-j]`).
    ///
    /// The lag polynomials become `[1, -phi...]` and `[1, theta...]`.
    pub fn from_coeffs(phi: &[f64], theta: &[f64]) -> Result<Self, ArmaError> {
        let ar = std::iter::once(1.0).chain(phi.iter().map(|c| -c)).collect();
        let ma = std::iter::once(1.0).chain(theta.iter().copied()).collect();
        Self::new(ar, ma)
    }

    /// Returns the AR lag polynomial, zero-lag term included.
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA lag polynomial, zero-lag term included.
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the AR order `p`.
    pub fn ar_order(&self) -> usize {
        self.ar.len() - 1
    }

    /// Returns the MA order `q`.
    pub fn ma_order(&self) -> usize {
        self.ma.len() - 1
    }

    /// Returns the AR coefficients in regression form (`-ar[1..] / ar[0]`).
    pub fn arcoefs(&self) -> Vec<f64> {
        self.ar[1..].iter().map(|a| -a / self.ar[0]).collect()
    }

    /// Returns the MA coefficients in regression form (`ma[1..] / ma[0]`).
    ///
    /// Empty when `ma[0] == 0`.
    pub fn macoefs(&self) -> Vec<f64> {
        if self.ma[0] == 0.0 {
            return Vec::new();
        }
        self.ma[1..].iter().map(|m| m / self.ma[0]).collect()
    }

    /// Returns `true` if every root of the AR polynomial lies strictly
    /// outside the unit circle.
    pub fn is_stationary(&self) -> bool {
        params::is_stable(&self.arcoefs())
    }

    /// Returns `true` if every root of the MA polynomial lies strictly
    /// outside the unit circle.
    ///
    /// A zero `ma[0]` is never invertible.
    pub fn is_invertible(&self) -> bool {
        if self.ma[0] == 0.0 {
            return false;
        }
        let theta: Vec<f64> = self.macoefs().iter().map(|m| -m).collect();
        params::is_stable(&theta)
    }

    /// Generates one sample path of length `nsample` with unit-scale
    /// Gaussian innovations and no burn-in.
    ///
    /// The recursion starts from zero initial conditions, so early values
    /// are not drawn from the stationary distribution.
    ///
    /// # Example
    ///
    /// ```
    /// use argen_arma::ArmaProcess;
    /// use rand::SeedableRng;
    ///
    /// let process = ArmaProcess::from_coeffs(&[0.6], &[]).unwrap();
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let path = process.generate_sample(250, &mut rng);
    /// assert_eq!(path.len(), 250);
    /// ```
    pub fn generate_sample<R: Rng>(&self, nsample: usize, rng: &mut R) -> Vec<f64> {
        sample::filter_path(&self.ar, &self.ma, nsample, &SampleOptions::default(), rng)
    }

    /// Generates one sample path of length `nsample` using the given
    /// innovation scale and burn-in.
    ///
    /// # Errors
    ///
    /// Returns [`ArmaError::InvalidScale`] if `options.scale()` is not
    /// finite and positive, and [`ArmaError::LengthOverflow`] if
    /// `nsample + options.burnin()` overflows.
    pub fn generate_sample_with<R: Rng>(
        &self,
        nsample: usize,
        options: &SampleOptions,
        rng: &mut R,
    ) -> Result<Vec<f64>, ArmaError> {
        options.validate()?;
        options.total_len(nsample)?;
        Ok(sample::filter_path(&self.ar, &self.ma, nsample, options, rng))
    }

    /// Generates `n_paths` independent sample paths, each of length
    /// `nsample`.
    ///
    /// Returns an [`Array2<f64>`] with shape `(nsample, n_paths)`; each
    /// column is one path.
    #[tracing::instrument(skip(self, options, rng), fields(p = self.ar_order(), q = self.ma_order()))]
    pub fn generate_samples<R: Rng>(
        &self,
        nsample: usize,
        n_paths: usize,
        options: &SampleOptions,
        rng: &mut R,
    ) -> Result<Array2<f64>, ArmaError> {
        options.validate()?;
        options.total_len(nsample)?;

        let mut output = Array2::zeros((nsample, n_paths));
        for path in 0..n_paths {
            let y = sample::filter_path(&self.ar, &self.ma, nsample, options, rng);
            for (t, val) in y.into_iter().enumerate() {
                output[[t, path]] = val;
            }
        }
        debug!(nsample, n_paths, "generated sample paths");

        Ok(output)
    }
}

fn check_polynomial(coeffs: &[f64], which: &'static str) -> Result<(), ArmaError> {
    if coeffs.is_empty() {
        return Err(ArmaError::EmptyPolynomial { which });
    }
    if let Some((lag, &value)) = coeffs.iter().enumerate().find(|(_, c)| !c.is_finite()) {
        return Err(ArmaError::NonFiniteCoefficient { which, lag, value });
    }
    Ok(())
}
