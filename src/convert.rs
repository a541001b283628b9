//! Pure conversion functions: TOML config + CLI overrides -> crate API config types.

use anyhow::{Context, Result, bail};

use argen_synth::{Ar1Config, ArpConfig, Interval};

use crate::cli::{Ar1Args, ArpArgs, OutputArgs};
use crate::config::{Ar1Toml, ArpToml, OutputToml};
use crate::output::OutputFormat;

/// Applies optional CLI bound overrides to a TOML interval.
fn resolve_interval(toml: [f64; 2], low: Option<f64>, high: Option<f64>) -> Interval {
    Interval::new(low.unwrap_or(toml[0]), high.unwrap_or(toml[1]))
}

/// Builds an [`Ar1Config`], CLI flags taking precedence over the TOML file.
pub fn build_ar1_config(toml: &Ar1Toml, args: &Ar1Args) -> Result<Ar1Config> {
    let config = Ar1Config::new()
        .with_seed(args.seed.unwrap_or(toml.seed))
        .with_vertical_shift(args.shift.unwrap_or(toml.vertical_shift))
        .with_size(args.size.unwrap_or(toml.size))
        .with_interval(resolve_interval(toml.interval, args.low, args.high));
    config.validate().context("invalid AR(1) configuration")?;
    Ok(config)
}

/// Builds an [`ArpConfig`], CLI flags taking precedence over the TOML file.
///
/// The order `p` has no default and must come from one of the two.
pub fn build_arp_config(toml: &ArpToml, args: &ArpArgs) -> Result<ArpConfig> {
    let Some(p) = args.p.or(toml.p) else {
        bail!("no AR order: set [arp].p in config or use --p");
    };

    let mut config = ArpConfig::new(p)
        .with_nsample(args.nsample.unwrap_or(toml.nsample))
        .with_interval(resolve_interval(toml.interval, args.low, args.high));
    if let Some(seed) = args.seed.or(toml.seed) {
        config = config.with_seed(seed);
    }
    config.validate().context("invalid AR(p) configuration")?;
    Ok(config)
}

/// Resolves the output format, CLI flag taking precedence over the TOML file.
pub fn resolve_format(toml: &OutputToml, args: &OutputArgs) -> OutputFormat {
    args.format.unwrap_or(toml.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ar1_toml_defaults_pass_through() {
        let config = build_ar1_config(&Ar1Toml::default(), &Ar1Args::default()).unwrap();
        assert_eq!(config, Ar1Config::default());
    }

    #[test]
    fn ar1_cli_overrides_toml() {
        let toml = Ar1Toml {
            seed: 5,
            vertical_shift: 3.0,
            size: 40,
            interval: [-0.2, 0.2],
        };
        let args = Ar1Args {
            seed: Some(9),
            low: Some(-0.1),
            ..Default::default()
        };
        let config = build_ar1_config(&toml, &args).unwrap();
        assert_eq!(config.seed(), 9);
        assert_eq!(config.vertical_shift(), 3.0);
        assert_eq!(config.size(), 40);
        assert_eq!(config.interval(), Interval::new(-0.1, 0.2));
    }

    #[test]
    fn ar1_inverted_interval_fails() {
        let args = Ar1Args {
            low: Some(0.9),
            high: Some(0.1),
            ..Default::default()
        };
        let err = build_ar1_config(&Ar1Toml::default(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("invalid coefficient interval"));
    }

    #[test]
    fn arp_requires_order() {
        let err = build_arp_config(&ArpToml::default(), &ArpArgs::default()).unwrap_err();
        assert!(err.to_string().contains("no AR order"));
    }

    #[test]
    fn arp_order_from_toml() {
        let toml = ArpToml {
            p: Some(2),
            seed: Some(42),
            ..Default::default()
        };
        let config = build_arp_config(&toml, &ArpArgs::default()).unwrap();
        assert_eq!(config.p(), 2);
        assert_eq!(config.nsample(), 100);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn arp_cli_overrides_toml() {
        let toml = ArpToml {
            p: Some(2),
            nsample: 10,
            interval: [0.0, 0.5],
            seed: None,
        };
        let args = ArpArgs {
            p: Some(4),
            nsample: Some(25),
            seed: Some(7),
            high: Some(0.4),
            ..Default::default()
        };
        let config = build_arp_config(&toml, &args).unwrap();
        assert_eq!(config.p(), 4);
        assert_eq!(config.nsample(), 25);
        assert_eq!(config.seed(), Some(7));
        assert_eq!(config.interval(), Interval::new(0.0, 0.4));
    }

    #[test]
    fn arp_zero_order_fails() {
        let args = ArpArgs {
            p: Some(0),
            ..Default::default()
        };
        let err = build_arp_config(&ArpToml::default(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("AR order must be at least 1"));
    }

    #[test]
    fn format_precedence() {
        let toml = OutputToml {
            format: OutputFormat::Json,
        };
        assert_eq!(resolve_format(&toml, &OutputArgs::default()), OutputFormat::Json);
        let args = OutputArgs {
            format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        assert_eq!(resolve_format(&toml, &args), OutputFormat::Csv);
    }
}
