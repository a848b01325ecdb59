//! Compiler dependency-scan reports
//!
//! The compiler's scan mode prints a JSON object whose `dependencies`
//! list names the packages a source directory imports.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Output of one compiler dependency scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    /// Packages the scanned package depends on
    pub dependencies: Vec<ScannedDependency>,
}

/// A dependency reported by the scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScannedDependency {
    /// Package name as the compiler reports it
    pub package_name: String,
}

impl ScanReport {
    /// Parse from raw JSON bytes; invalid UTF-8 is an error
    pub fn from_slice(content: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(content)
    }

    /// Dependency package names, order preserved
    pub fn package_names(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .map(|d| d.package_name.clone())
            .collect()
    }
}

/// Source directory of a package.
///
/// An empty name denotes the module's root package, which lives directly
/// in `src_dir`.
pub fn package_dir(src_dir: &Path, package_local_name: &str) -> PathBuf {
    if package_local_name.is_empty() {
        src_dir.to_path_buf()
    } else {
        src_dir.join(package_local_name)
    }
}
