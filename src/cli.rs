use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// argen synthetic autoregressive series generator.
#[derive(Parser)]
#[command(
    name = "argen",
    version,
    about = "Synthetic autoregressive time-series generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a shifted AR(1) series with a random coefficient.
    Ar1(Ar1Args),
    /// Generate an AR(p) series with random coefficients.
    Arp(ArpArgs),
}

/// Arguments for the `ar1` subcommand.
#[derive(clap::Args, Default)]
pub struct Ar1Args {
    /// Path to TOML configuration file (default: argen.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override RNG seed.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override constant added to every value.
    #[arg(long, allow_negative_numbers = true)]
    pub shift: Option<f64>,

    /// Override series length.
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Override lower bound of the coefficient interval.
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// Override upper bound of the coefficient interval.
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `arp` subcommand.
#[derive(clap::Args, Default)]
pub struct ArpArgs {
    /// Path to TOML configuration file (default: argen.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// AR order (number of lags).
    #[arg(short, long)]
    pub p: Option<usize>,

    /// Override series length.
    #[arg(short = 'n', long)]
    pub nsample: Option<usize>,

    /// Override RNG seed. Without a seed the generator is seeded from the OS.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override lower bound of the coefficient interval.
    #[arg(long, allow_negative_numbers = true)]
    pub low: Option<f64>,

    /// Override upper bound of the coefficient interval.
    #[arg(long, allow_negative_numbers = true)]
    pub high: Option<f64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output destination and format, shared by all subcommands.
#[derive(clap::Args, Default)]
pub struct OutputArgs {
    /// Output file path. Writes to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_ar1_overrides() {
        let cli = Cli::try_parse_from([
            "argen", "-vv", "ar1", "--seed", "3", "--shift", "-2.5", "-n", "20", "--low", "-0.9",
            "--high", "0.1", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Ar1(args) = cli.command else {
            panic!("expected ar1 subcommand");
        };
        assert_eq!(args.seed, Some(3));
        assert_eq!(args.shift, Some(-2.5));
        assert_eq!(args.size, Some(20));
        assert_eq!(args.low, Some(-0.9));
        assert_eq!(args.high, Some(0.1));
        assert_eq!(args.output.format, Some(OutputFormat::Json));
        assert!(args.output.output.is_none());
    }

    #[test]
    fn parse_arp() {
        let cli = Cli::try_parse_from(["argen", "arp", "-p", "3", "--nsample", "50"]).unwrap();
        let Command::Arp(args) = cli.command else {
            panic!("expected arp subcommand");
        };
        assert_eq!(args.p, Some(3));
        assert_eq!(args.nsample, Some(50));
        assert_eq!(args.seed, None);
    }
}
