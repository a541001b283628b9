//! Summary statistics for synthetic series.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Sample autocorrelation at `lag`.
///
/// Uses the standard biased estimator: the lagged cross-product sum divided
/// by the total sum of squared deviations, both about the full-sample mean.
/// Returns `None` if `data.len() <= lag` or the data are constant.
pub fn autocorrelation(data: &[f64], lag: usize) -> Option<f64> {
    if data.len() <= lag {
        return None;
    }

    let m = mean(data);
    let denom: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    if denom == 0.0 {
        return None;
    }

    let num: f64 = data[lag..]
        .iter()
        .zip(data.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum();

    Some(num / denom)
}

/// Headline statistics for a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub sd: f64,
    /// Lag-1 autocorrelation, if defined.
    pub acf1: Option<f64>,
}

/// Computes a [`Summary`] of `data`.
pub fn summarize(data: &[f64]) -> Summary {
    Summary {
        n: data.len(),
        mean: mean(data),
        sd: sd(data),
        acf1: autocorrelation(data, 1),
    }
}
