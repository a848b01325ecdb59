//! Compiler dependency scan
//!
//! Runs the compiler in dependency-scan mode on one package directory and
//! parses the JSON report it prints.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::defaults::{DEFAULT_COMPILER, DEFAULT_SCAN_MODULE, SCAN_FLAG};
use crate::core::scan::ScanReport;
use crate::error::ToolError;
use crate::infra::tool::Tool;

/// Compiler wrapper for dependency scans
#[derive(Debug, Clone)]
pub struct Compiler {
    tool: Tool,
    /// Module name passed to every scan
    module_name: String,
}

impl Compiler {
    /// Create a compiler wrapper
    pub fn new(command: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            tool: Tool::new(command),
            module_name: module_name.into(),
        }
    }

    /// Scan the package in `package_dir`
    pub async fn scan(&self, package_dir: &Path) -> Result<ScanReport, ToolError> {
        tracing::info!(
            "Scanning dependencies of {} (module {})",
            package_dir.display(),
            self.module_name
        );

        let args: [&OsStr; 5] = [
            OsStr::new(SCAN_FLAG),
            OsStr::new("--package"),
            package_dir.as_os_str(),
            OsStr::new("--module-name"),
            OsStr::new(&self.module_name),
        ];
        let output = self.tool.run(args, Path::new("."), false).await?;

        ScanReport::from_slice(&output.stdout).map_err(|e| ToolError::InvalidOutput {
            tool: self.tool.command().to_string(),
            error: e.to_string(),
        })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(DEFAULT_COMPILER, DEFAULT_SCAN_MODULE)
    }
}
