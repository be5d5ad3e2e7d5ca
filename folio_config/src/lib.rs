use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Loads the configuration, later files overriding earlier ones.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

pub fn load_default() -> anyhow::Result<Config> {
    load(&[DEFAULT_CONFIG_PATH])
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub success_reset_delay: Duration,
}
