//! `ar1` and `arp` commands: build config, generate, summarise, write.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use argen_synth::{SyntheticSeries, generate_ar_p_series, generate_random_ar_1};

use crate::cli::{Ar1Args, ArpArgs, OutputArgs};
use crate::config::ArgenConfig;
use crate::convert;
use crate::output;

/// Run the AR(1) generator.
pub fn run_ar1(args: Ar1Args) -> Result<()> {
    let _cmd = info_span!("ar1").entered();
    let config = ArgenConfig::load(args.config.as_deref())?;

    let ar1_cfg = convert::build_ar1_config(&config.ar1, &args)?;
    info!(
        seed = ar1_cfg.seed(),
        size = ar1_cfg.size(),
        vertical_shift = ar1_cfg.vertical_shift(),
        "generating AR(1) series"
    );
    let series = generate_random_ar_1(&ar1_cfg).context("AR(1) generation failed")?;

    emit(&series, "ar1", &config, &args.output)
}

/// Run the AR(p) generator.
pub fn run_arp(args: ArpArgs) -> Result<()> {
    let _cmd = info_span!("arp").entered();
    let config = ArgenConfig::load(args.config.as_deref())?;

    let arp_cfg = convert::build_arp_config(&config.arp, &args)?;
    info!(
        p = arp_cfg.p(),
        nsample = arp_cfg.nsample(),
        seed = ?arp_cfg.seed(),
        "generating AR(p) series"
    );
    let series = generate_ar_p_series(&arp_cfg).context("AR(p) generation failed")?;

    emit(&series, "arp", &config, &args.output)
}

fn emit(
    series: &SyntheticSeries,
    generator: &str,
    config: &ArgenConfig,
    out: &OutputArgs,
) -> Result<()> {
    let summary = argen_stats::summarize(series.values());
    info!(
        n = summary.n,
        mean = summary.mean,
        sd = summary.sd,
        acf1 = ?summary.acf1,
        stationary = series.process().is_stationary(),
        "series generated"
    );

    let format = convert::resolve_format(&config.output, out);
    let rendered = output::render(series, generator, summary, format)?;
    output::write(&rendered, out.output.as_deref())
}
