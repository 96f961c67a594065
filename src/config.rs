use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Root configuration structure, deserialized from `.license-gen/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Defaults for `license-gen generate`.
    pub generate: GenerateConfig,
    /// How `license-gen check` and `stats` treat their results.
    pub check: CheckConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerateConfig {
    /// Author used when `--author` is not given.
    pub author: Option<String>,
    /// License key used when `--type` is not given.
    pub license: Option<String>,
    /// Output path used when `--output` is not given.
    pub output: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    /// Exit with code 1 when any dependency lands in warnings.
    pub fail_on_warnings: bool,
    /// Exit with code 1 when any dependency license is unknown.
    pub fail_on_unknown: bool,
    /// Dependency names left out of `check` and `stats`.
    pub ignore: Vec<String>,
}

impl CheckConfig {
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|i| i == name)
    }
}

/// Load configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<project_path>/.license-gen/config.toml`
/// 3. `~/.config/license-gen/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-gen").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("license-gen").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using defaults");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}
