use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Config file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "argen.toml";

/// Top-level argen configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArgenConfig {
    /// AR(1) generator settings.
    #[serde(default)]
    pub ar1: Ar1Toml,

    /// AR(p) generator settings.
    #[serde(default)]
    pub arp: ArpToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

impl ArgenConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and built-in defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ar1Toml {
    #[serde(default = "default_ar1_seed")]
    pub seed: u64,
    #[serde(default = "default_vertical_shift")]
    pub vertical_shift: f64,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_interval")]
    pub interval: [f64; 2],
}

impl Default for Ar1Toml {
    fn default() -> Self {
        Self {
            seed: default_ar1_seed(),
            vertical_shift: default_vertical_shift(),
            size: default_size(),
            interval: default_interval(),
        }
    }
}

fn default_ar1_seed() -> u64 {
    1
}
fn default_vertical_shift() -> f64 {
    10.0
}
fn default_size() -> usize {
    1000
}
fn default_interval() -> [f64; 2] {
    [-0.5, 0.5]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArpToml {
    #[serde(default)]
    pub p: Option<usize>,
    #[serde(default = "default_nsample")]
    pub nsample: usize,
    #[serde(default = "default_interval")]
    pub interval: [f64; 2],
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ArpToml {
    fn default() -> Self {
        Self {
            p: None,
            nsample: default_nsample(),
            interval: default_interval(),
            seed: None,
        }
    }
}

fn default_nsample() -> usize {
    100
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub format: OutputFormat,
}
