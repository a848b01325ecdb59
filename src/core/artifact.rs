//! Artifact paths and output lines
//!
//! Dependency identifiers map to `<build_dir>/<dependency>.<extension>`.

use crate::config::defaults::{DEFAULT_ARTIFACT_EXT, DEFAULT_BUILD_DIR};

/// Where compiled packages land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Build directory prefix
    pub build_dir: String,
    /// Artifact file extension, without the dot
    pub extension: String,
}

impl ArtifactLayout {
    /// Create a layout
    pub fn new(build_dir: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            build_dir: build_dir.into(),
            extension: extension.into(),
        }
    }

    /// Artifact path for one dependency
    pub fn path_for(&self, dependency: &str) -> String {
        format!("{}/{}.{}", self.build_dir, dependency, self.extension)
    }

    /// Artifact paths for dependencies, order preserved
    pub fn paths_for<S: AsRef<str>>(&self, dependencies: &[S]) -> Vec<String> {
        dependencies
            .iter()
            .map(|d| self.path_for(d.as_ref()))
            .collect()
    }
}

impl Default for ArtifactLayout {
    fn default() -> Self {
        Self::new(DEFAULT_BUILD_DIR, DEFAULT_ARTIFACT_EXT)
    }
}

/// Render tokens with a space after each one.
///
/// Used by the manifest-based queries; an empty list renders as "".
pub fn render_trailing<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut line = String::new();
    for token in tokens {
        line.push_str(token.as_ref());
        line.push(' ');
    }
    line
}

/// Render tokens joined by single spaces
pub fn render_joined<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}
