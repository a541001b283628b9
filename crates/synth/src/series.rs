//! Generated series together with the process that produced it.

use argen_arma::ArmaProcess;

/// A synthetic series and the ARMA process it was sampled from.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticSeries {
    values: Vec<f64>,
    process: ArmaProcess,
    vertical_shift: f64,
}

impl SyntheticSeries {
    pub(crate) fn new(values: Vec<f64>, process: ArmaProcess, vertical_shift: f64) -> Self {
        Self {
            values,
            process,
            vertical_shift,
        }
    }

    /// Returns the generated values in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the series and returns its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Returns the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the process the values were sampled from.
    pub fn process(&self) -> &ArmaProcess {
        &self.process
    }

    /// Returns the AR lag polynomial used, leading 1 included.
    pub fn ar_params(&self) -> &[f64] {
        self.process.ar()
    }

    /// Returns the MA lag polynomial used.
    pub fn ma_params(&self) -> &[f64] {
        self.process.ma()
    }

    /// Returns the constant added to every sampled value (0 when unshifted).
    pub fn vertical_shift(&self) -> f64 {
        self.vertical_shift
    }
}
