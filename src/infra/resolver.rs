//! Resolver tool
//!
//! The resolver (`cpm`) refreshes `module-resolve.json` as a side effect
//! of its `update` subcommand. Its console output is discarded.

use std::path::Path;

use crate::config::defaults::{DEFAULT_RESOLVER, RESOLVER_UPDATE_SUBCOMMAND};
use crate::error::ToolError;
use crate::infra::tool::Tool;

/// Resolver tool wrapper
#[derive(Debug, Clone)]
pub struct Resolver {
    tool: Tool,
}

impl Resolver {
    /// Create a resolver wrapper for a command name or path
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            tool: Tool::new(command),
        }
    }

    /// Refresh the resolution document in `project_dir`
    pub async fn update(&self, project_dir: &Path) -> Result<(), ToolError> {
        tracing::info!(
            "Refreshing module resolution with '{} {}'",
            self.tool.command(),
            RESOLVER_UPDATE_SUBCOMMAND
        );
        let output = self
            .tool
            .run([RESOLVER_UPDATE_SUBCOMMAND], project_dir, true)
            .await?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!("{}: {}", self.tool.command(), stderr.trim());
        }
        Ok(())
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLVER)
    }
}
