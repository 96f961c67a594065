//! Shared helpers for `license-gen` integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Temporary project directory the binary runs in.
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Node project with `license` and one installed dependency per entry of `deps`.
    ///
    /// A `None` license writes a dependency manifest without a `license` field.
    pub fn node_project(license: &str, deps: &[(&str, Option<&str>)]) -> Self {
        let project = Self::new();
        let names: Vec<String> = deps
            .iter()
            .map(|(name, _)| format!("\"{}\": \"^1.0.0\"", name))
            .collect();
        project.create_file(
            "package.json",
            &format!(
                "{{ \"name\": \"app\", \"license\": \"{}\", \"dependencies\": {{ {} }} }}",
                license,
                names.join(", ")
            ),
        );
        project.create_file("node_modules/.package-lock.json", "{}");
        for (name, dep_license) in deps {
            let body = match dep_license {
                Some(l) => format!(
                    "{{ \"name\": \"{}\", \"version\": \"1.0.0\", \"license\": \"{}\" }}",
                    name, l
                ),
                None => format!("{{ \"name\": \"{}\", \"version\": \"1.0.0\" }}", name),
            };
            project.create_file(&format!("node_modules/{}/package.json", name), &body);
        }
        project
    }

    /// Run `license-gen` inside the project directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[])
    }

    /// Run `license-gen` with extra environment variables.
    ///
    /// `HOME` points at the project directory so a config in the real home
    /// directory never leaks into a test, and `RUST_LOG` is cleared unless
    /// `envs` sets it.
    pub fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("HOME", self.path())
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("RUST_LOG")
            .args(args);
        for (key, value) in envs {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to execute license-gen")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_license-gen"))
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
