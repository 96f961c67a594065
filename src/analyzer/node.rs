use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::ProjectError;
use crate::models::{DependencyLicense, ProjectScan};

/// Literal reported for dependencies that declare no license.
pub const UNKNOWN_LICENSE: &str = "UNKNOWN";

pub struct NodeAnalyzer;

impl NodeAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl super::Analyzer for NodeAnalyzer {
    fn analyze(&self, path: &Path) -> Result<ProjectScan, ProjectError> {
        let manifest_path = path.join("package.json");
        if !manifest_path.exists() {
            return Err(ProjectError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        let manifest = read_json(&manifest_path)?;
        let project_license = license_of(&manifest).ok_or_else(|| ProjectError::NoProjectLicense {
            path: manifest_path.clone(),
        })?;

        let node_modules = path.join("node_modules");
        if !node_modules.is_dir() {
            return Err(ProjectError::DependenciesNotInstalled {
                path: path.to_path_buf(),
            });
        }

        let mut dependencies = Vec::new();
        for name in declared_dependencies(&manifest) {
            let dep_manifest = node_modules.join(&name).join("package.json");
            if !dep_manifest.exists() {
                continue;
            }
            dependencies.push(read_dependency(name, &dep_manifest));
        }

        info!(
            license = %project_license,
            dependencies = dependencies.len(),
            "scanned node project"
        );

        Ok(ProjectScan {
            project_license,
            dependencies,
        })
    }
}

fn read_json(path: &Path) -> Result<Value, ProjectError> {
    let content = std::fs::read_to_string(path).map_err(|source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ProjectError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Names from `dependencies` then `devDependencies`, first occurrence wins.
fn declared_dependencies(manifest: &Value) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();

    for section in &["dependencies", "devDependencies"] {
        if let Some(pkgs) = manifest.get(section).and_then(|v| v.as_object()) {
            for name in pkgs.keys() {
                if seen.insert(name.clone()) {
                    names.push(name.clone());
                }
            }
        }
    }

    names
}

fn read_dependency(name: String, manifest_path: &Path) -> DependencyLicense {
    match read_json(manifest_path) {
        Ok(json) => {
            let version = json
                .get("version")
                .and_then(|v| v.as_str())
                .map(str::to_string);
            let license = license_of(&json).unwrap_or_else(|| UNKNOWN_LICENSE.to_string());
            DependencyLicense {
                name,
                version,
                license,
            }
        }
        Err(e) => {
            warn!(dependency = %name, error = %e, "could not read dependency manifest");
            DependencyLicense {
                name,
                version: None,
                license: UNKNOWN_LICENSE.to_string(),
            }
        }
    }
}

/// Declared license of a `package.json`.
///
/// Accepts the `"license": "MIT"` form as well as the deprecated
/// `"license": { "type": "MIT" }` and `"licenses": [{ "type": "MIT" }]` forms.
fn license_of(json: &Value) -> Option<String> {
    let declared = match json.get("license") {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(Value::Object(obj)) => obj.get("type").and_then(|t| t.as_str()),
        _ => json
            .get("licenses")
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.first())
            .and_then(|first| first.get("type"))
            .and_then(|t| t.as_str()),
    };
    declared.filter(|s| !s.is_empty()).map(str::to_string)
}
