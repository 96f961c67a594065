use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the license registry and compatibility engine.
#[derive(Error, Debug, PartialEq)]
pub enum LicenseError {
    /// The project license key has no registry entry.
    #[error("Unknown project license: {key}")]
    UnknownProjectLicense { key: String },

    /// A template was requested for a key the registry does not carry.
    #[error("License type \"{key}\" not found. Available: {}", .available.join(", "))]
    UnknownLicenseType { key: String, available: Vec<String> },
}

/// Failures while reading a project's manifest and installed dependencies.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("package.json not found in {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("No license specified in {path}")]
    NoProjectLicense { path: PathBuf },

    #[error("node_modules not found in {path}. Run npm install first.")]
    DependenciesNotInstalled { path: PathBuf },

    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
