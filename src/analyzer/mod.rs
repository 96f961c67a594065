use std::path::Path;

use crate::error::ProjectError;
use crate::models::ProjectScan;

pub mod node;

/// Reads a project's own license and its installed first-level dependencies.
pub trait Analyzer {
    fn analyze(&self, path: &Path) -> Result<ProjectScan, ProjectError>;
}
