use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Serialize;
use tracing::info;

use crate::error::LicenseError;
use crate::license::registry::Registry;
use crate::models::LicenseSummary;

pub const DEFAULT_AUTHOR: &str = "Your Name";

/// Outcome of writing a license file.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLicense {
    pub path: PathBuf,
    pub license: String,
}

pub fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

/// Fill the `[year]` and `[fullname]` placeholders of `key`'s template.
pub fn render(registry: &Registry, key: &str, author: &str, year: &str) -> Result<String, LicenseError> {
    let def = registry
        .lookup(key)
        .ok_or_else(|| LicenseError::UnknownLicenseType {
            key: key.to_string(),
            available: registry.keys(),
        })?;

    Ok(def
        .template
        .replace("[year]", year)
        .replace("[fullname]", author))
}

/// Render `key` and write it to `output`.
pub fn generate(
    registry: &Registry,
    key: &str,
    author: Option<&str>,
    year: Option<&str>,
    output: &Path,
) -> Result<GeneratedLicense> {
    let year = year.map(str::to_string).unwrap_or_else(current_year);
    let author = author.unwrap_or(DEFAULT_AUTHOR);
    let content = render(registry, key, author, &year)?;

    std::fs::write(output, content)
        .with_context(|| format!("failed to write {}", output.display()))?;

    let path = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());
    let license = registry
        .lookup(key)
        .map(|d| d.name.to_string())
        .unwrap_or_else(|| key.to_string());
    info!(license = key, path = %path.display(), "license written");

    Ok(GeneratedLicense { path, license })
}

/// Every registered license, in catalog order.
pub fn list(registry: &Registry) -> Vec<LicenseSummary> {
    registry
        .iter()
        .map(|def| LicenseSummary {
            key: def.key.to_string(),
            name: def.name.to_string(),
            category: def.category(),
            permissive: def.permissive,
            copyleft: def.copyleft,
            public_domain: def.public_domain,
        })
        .collect()
}
