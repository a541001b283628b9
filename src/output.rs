//! Rendering of generated series as CSV or JSON.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

use argen_stats::Summary;
use argen_synth::SyntheticSeries;

/// Output serialisation format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `t,value` rows with a header.
    #[default]
    Csv,
    /// A single JSON object with coefficients, values and summary.
    Json,
}

/// JSON document describing one generated series.
#[derive(Debug, Serialize)]
pub struct SeriesReport<'a> {
    /// Subcommand that produced the series (`"ar1"` or `"arp"`).
    pub generator: &'a str,
    /// AR lag polynomial, leading 1 included.
    pub ar: &'a [f64],
    /// MA lag polynomial.
    pub ma: &'a [f64],
    /// Constant added to every value.
    pub vertical_shift: f64,
    /// Series values in time order.
    pub values: &'a [f64],
    /// Headline statistics of `values`.
    pub summary: SummaryOutput,
}

/// Summary statistics for the JSON report.
#[derive(Debug, Serialize)]
pub struct SummaryOutput {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation.
    pub sd: f64,
    /// Lag-1 autocorrelation, `null` when undefined.
    pub acf1: Option<f64>,
}

impl From<Summary> for SummaryOutput {
    fn from(s: Summary) -> Self {
        Self {
            n: s.n,
            mean: s.mean,
            sd: s.sd,
            acf1: s.acf1,
        }
    }
}

/// Renders `series` in the requested format.
///
/// JSON has no representation for NaN or infinities, so a series containing
/// them (e.g. an explosive AR(p) draw) is rejected for JSON output. CSV
/// writes them as `NaN` / `inf`.
pub fn render(
    series: &SyntheticSeries,
    generator: &str,
    summary: Summary,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Csv => {
            let mut out = String::from("t,value\n");
            for (t, v) in series.values().iter().enumerate() {
                // Writing to a String never fails.
                let _ = writeln!(out, "{t},{v}");
            }
            Ok(out)
        }
        OutputFormat::Json => {
            if let Some(t) = series.values().iter().position(|v| !v.is_finite()) {
                bail!(
                    "cannot write JSON: value at t={t} is not finite ({}); use CSV output",
                    series.values()[t]
                );
            }
            let report = SeriesReport {
                generator,
                ar: series.ar_params(),
                ma: series.ma_params(),
                vertical_shift: series.vertical_shift(),
                values: series.values(),
                summary: summary.into(),
            };
            let mut json =
                serde_json::to_string_pretty(&report).context("failed to serialise series")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Writes rendered output to `path`, or to stdout when `path` is `None`.
pub fn write(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, rendered)
                .with_context(|| format!("failed to write output: {}", p.display()))?;
            info!(path = %p.display(), "series written");
        }
        None => {
            use std::io::Write;
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())
                .context("failed to write series to stdout")?;
            lock.flush().context("failed to flush stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argen_synth::{
        Ar1Config, ArpConfig, Interval, generate_ar_p_series, generate_random_ar_1,
    };

    #[test]
    fn csv_has_header_and_one_row_per_value() {
        let series = generate_random_ar_1(&Ar1Config::new().with_size(5)).unwrap();
        let summary = argen_stats::summarize(series.values());
        let csv = render(&series, "ar1", summary, OutputFormat::Csv).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "t,value");
        for (t, line) in lines[1..].iter().enumerate() {
            let (idx, value) = line.split_once(',').unwrap();
            assert_eq!(idx.parse::<usize>().unwrap(), t);
            assert_eq!(value.parse::<f64>().unwrap(), series.values()[t]);
        }
    }

    #[test]
    fn json_report_fields() {
        let series = generate_ar_p_series(&ArpConfig::new(2).with_nsample(8).with_seed(1)).unwrap();
        let summary = argen_stats::summarize(series.values());
        let json = render(&series, "arp", summary, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["generator"], "arp");
        assert_eq!(parsed["ar"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["ar"][0], 1.0);
        assert_eq!(parsed["ma"], serde_json::json!([1.0]));
        assert_eq!(parsed["vertical_shift"], 0.0);
        assert_eq!(parsed["values"].as_array().unwrap().len(), 8);
        assert_eq!(parsed["summary"]["n"], 8);
    }

    #[test]
    fn json_rejects_explosive_series() {
        let config = ArpConfig::new(3)
            .with_nsample(2000)
            .with_seed(1)
            .with_interval(Interval::new(2.0, 3.0));
        let series = generate_ar_p_series(&config).unwrap();
        assert!(series.values().iter().any(|v| !v.is_finite()));

        let summary = argen_stats::summarize(series.values());
        let err = render(&series, "arp", summary, OutputFormat::Json).unwrap_err();
        assert!(err.to_string().contains("is not finite"), "err: {err}");
    }

    #[test]
    fn csv_keeps_explosive_series() {
        let config = ArpConfig::new(3)
            .with_nsample(2000)
            .with_seed(1)
            .with_interval(Interval::new(2.0, 3.0));
        let series = generate_ar_p_series(&config).unwrap();
        let summary = argen_stats::summarize(series.values());
        let csv = render(&series, "arp", summary, OutputFormat::Csv).unwrap();
        assert_eq!(csv.lines().count(), 2001);
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.csv");
        write("t,value\n0,1\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "t,value\n0,1\n");
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("series.csv");
        let err = write("x", Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to write output"));
    }
}
