//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for a Cangjie module and provides
/// utilities for setting up resolver outputs and fake tools.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Directory holding fake tool scripts
    pub tools: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            tools: TempDir::new().expect("Failed to create tools directory"),
        }
    }

    /// Create a project with module.json and module-resolve.json
    pub fn with_module(name: &str, resolve: &str) -> Self {
        let project = Self::new();
        project.create_file("module.json", &format!(r#"{{"name": "{name}"}}"#));
        project.create_file("module-resolve.json", resolve);
        project
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Create an executable shell script standing in for an external tool
    #[cfg(unix)]
    pub fn create_tool(&self, name: &str, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        path.to_string_lossy().into_owned()
    }

    /// A resolver that succeeds without touching module-resolve.json
    #[cfg(unix)]
    pub fn noop_resolver(&self) -> String {
        self.create_tool("cpm", "exit 0")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a binary in `dir` with `args`
pub fn run_bin(bin: &str, dir: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(bin);
    cmd.current_dir(dir);
    cmd.env_remove("CJDEPS_RESOLVER");
    cmd.env_remove("CJDEPS_COMPILER");
    cmd.env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute binary")
}

/// Stdout of a finished command
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Resolution document for a small module
///
/// `circuits/app` uses `graphs` and `utils`, `graphs` uses `utils`.
pub const SAMPLE_RESOLVE: &str = r#"{
    "resolves": [
        {"packageName": "circuits/app", "requires": ["circuits/graphs", "circuits/utils"]},
        {"packageName": "circuits/graphs", "requires": ["circuits/utils"]},
        {"packageName": "circuits/utils", "requires": []},
        {"packageName": "circuits", "requires": ["circuits/app"]}
    ]
}"#;

/// Resolution document listing a dependency before its dependent
pub const MISORDERED_RESOLVE: &str = r#"{
    "resolves": [
        {"packageName": "circuits/utils", "requires": []},
        {"packageName": "circuits/app", "requires": ["circuits/utils"]},
        {"packageName": "circuits", "requires": ["circuits/app"]}
    ]
}"#;
