use std::collections::BTreeMap;

use serde::Serialize;

/// One entry of the license catalog.
#[derive(Debug, Clone)]
pub struct LicenseDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub permissive: bool,
    pub copyleft: bool,
    pub public_domain: bool,
    /// Canonical keys that projects under this license may depend on freely.
    pub compatible: &'static [&'static str],
    /// License body with `[year]` and `[fullname]` placeholders.
    pub template: &'static str,
}

impl LicenseDefinition {
    pub fn category(&self) -> LicenseCategory {
        if self.public_domain {
            LicenseCategory::PublicDomain
        } else if self.permissive {
            LicenseCategory::Permissive
        } else if self.copyleft {
            LicenseCategory::Copyleft
        } else {
            LicenseCategory::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LicenseCategory {
    PublicDomain,
    Permissive,
    Copyleft,
    Other,
}

impl std::fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LicenseCategory::PublicDomain => write!(f, "Public Domain"),
            LicenseCategory::Permissive => write!(f, "Permissive"),
            LicenseCategory::Copyleft => write!(f, "Copyleft"),
            LicenseCategory::Other => write!(f, "Other"),
        }
    }
}

/// Read-only view of a license for `info` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseInfo {
    pub key: String,
    pub name: String,
    pub category: LicenseCategory,
    pub permissive: bool,
    pub copyleft: bool,
    pub public_domain: bool,
    pub compatible: Vec<String>,
}

/// Row of the `list` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LicenseSummary {
    pub key: String,
    pub name: String,
    pub category: LicenseCategory,
    pub permissive: bool,
    pub copyleft: bool,
    pub public_domain: bool,
}

/// A dependency license that did not pass cleanly, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub license: String,
    pub reason: String,
}

/// Partition of a dependency license list against a project license.
///
/// Every partition keeps the order in which licenses were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompatibilityResult {
    pub valid: bool,
    pub compatible: Vec<String>,
    pub incompatible: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub unknown: Vec<String>,
}

impl CompatibilityResult {
    /// `true` when nothing landed in warnings or unknown either.
    pub fn is_clean(&self) -> bool {
        self.valid && self.warnings.is_empty() && self.unknown.is_empty()
    }
}

/// Frequency distribution of literal license strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LicenseStats {
    pub total: usize,
    pub unique: usize,
    pub distribution: BTreeMap<String, usize>,
}

impl LicenseStats {
    /// Distribution ordered by count descending, then license ascending.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .distribution
            .iter()
            .map(|(license, count)| (license.as_str(), *count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

/// A dependency as installed in the project, with its declared license.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DependencyLicense {
    pub name: String,
    pub version: Option<String>,
    pub license: String,
}

/// Project license plus the first-level dependencies found on disk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectScan {
    pub project_license: String,
    pub dependencies: Vec<DependencyLicense>,
}

impl ProjectScan {
    pub fn licenses(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.license.as_str()).collect()
    }
}
