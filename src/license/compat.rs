use tracing::debug;

use crate::error::LicenseError;
use crate::license::registry::Registry;
use crate::license::spdx::normalize;
use crate::models::{CompatibilityResult, Finding, LicenseDefinition, LicenseInfo};

pub const REASON_PERMISSIVE_IN_COPYLEFT: &str =
    "permissive license in a copyleft project — review required";
pub const REASON_INCOMPATIBLE: &str = "not compatible with project license";

/// Placeholders that dependency metadata uses for "no license declared".
const UNKNOWN_MARKERS: &[&str] = &["", "UNKNOWN", "UNLICENSED"];

/// Where a single dependency license lands relative to a project license.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Compatible,
    Warning(&'static str),
    Incompatible(&'static str),
    Unknown,
}

/// Partition `dependency_licenses` against `project_key`.
///
/// The project key is looked up verbatim; only dependency strings go through
/// [`normalize`]. Unrecognized dependency licenses are reported as data in
/// `unknown`, never as errors.
pub fn check_compatibility<S: AsRef<str>>(
    registry: &Registry,
    project_key: &str,
    dependency_licenses: &[S],
) -> Result<CompatibilityResult, LicenseError> {
    let project = resolve_project(registry, project_key)?;

    let mut result = CompatibilityResult::default();

    for raw in dependency_licenses {
        let raw = raw.as_ref();
        let outcome = classify_dependency(registry, project, raw);
        debug!(project = project.key, license = raw, ?outcome, "classified dependency license");

        match outcome {
            Classification::Compatible => result.compatible.push(raw.to_string()),
            Classification::Warning(reason) => result.warnings.push(Finding {
                license: raw.to_string(),
                reason: reason.to_string(),
            }),
            Classification::Incompatible(reason) => result.incompatible.push(Finding {
                license: raw.to_string(),
                reason: reason.to_string(),
            }),
            Classification::Unknown => result.unknown.push(raw.to_string()),
        }
    }

    result.valid = result.incompatible.is_empty();
    Ok(result)
}

/// Look up a project license verbatim. Project keys are never normalized.
pub fn resolve_project(
    registry: &Registry,
    project_key: &str,
) -> Result<&'static LicenseDefinition, LicenseError> {
    registry
        .lookup(project_key)
        .ok_or_else(|| LicenseError::UnknownProjectLicense {
            key: project_key.to_string(),
        })
}

/// Decide one dependency license against an already resolved project license.
pub fn classify_dependency(
    registry: &Registry,
    project: &LicenseDefinition,
    raw: &str,
) -> Classification {
    if UNKNOWN_MARKERS.iter().any(|marker| *marker == raw) {
        return Classification::Unknown;
    }

    let Some(dep_key) = normalize(raw) else {
        return Classification::Unknown;
    };

    if project.compatible.contains(&dep_key) {
        return Classification::Compatible;
    }

    // A normalized key may still be missing from a custom registry
    let dep_permissive = registry
        .lookup(dep_key)
        .map(|d| d.permissive)
        .unwrap_or(false);

    if project.copyleft && dep_permissive {
        Classification::Warning(REASON_PERMISSIVE_IN_COPYLEFT)
    } else {
        Classification::Incompatible(REASON_INCOMPATIBLE)
    }
}

/// Category flags and compatible set of `key`, or `None` when unregistered.
pub fn info(registry: &Registry, key: &str) -> Option<LicenseInfo> {
    let def = registry.lookup(key)?;
    Some(LicenseInfo {
        key: def.key.to_string(),
        name: def.name.to_string(),
        category: def.category(),
        permissive: def.permissive,
        copyleft: def.copyleft,
        public_domain: def.public_domain,
        compatible: def.compatible.iter().map(|k| k.to_string()).collect(),
    })
}
