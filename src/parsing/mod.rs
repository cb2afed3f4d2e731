pub mod config;
pub mod tonemap;

pub use config::Config;
pub use tonemap::parse_tonemapper;

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

pub type Vec3Data = [f32; 3];
pub type Point3Data = [f32; 3];

pub fn parse_config(input: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(input).context("failed to parse config")?;
    config.validate().context("invalid config")?;
    Ok(config)
}

pub fn get_settings(filepath: &Path) -> anyhow::Result<Config> {
    info!("loading config file, {}", filepath.to_string_lossy());
    let input = fs::read_to_string(filepath)
        .with_context(|| format!("failed to read {}", filepath.display()))?;
    info!("done: {} bytes", input.len());
    parse_config(&input).with_context(|| format!("in {}", filepath.display()))
}
