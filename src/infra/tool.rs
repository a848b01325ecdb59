//! External tool invocation
//!
//! Runs a tool to completion and captures its output. There is no
//! timeout: a hanging tool hangs the invocation.

use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use tokio::process::Command;

use crate::error::ToolError;

/// An external command-line tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Command name or path
    command: String,
}

impl Tool {
    /// Create a tool wrapper for a command name or path
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The command as configured
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Locate the tool binary
    pub fn locate(&self) -> Result<PathBuf, ToolError> {
        which::which(&self.command).map_err(|_| ToolError::NotFound {
            tool: self.command.clone(),
        })
    }

    /// Run the tool in `dir`, capturing stdout unless `discard_stdout`
    pub async fn run<I, S>(
        &self,
        args: I,
        dir: &Path,
        discard_stdout: bool,
    ) -> Result<Output, ToolError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let program = self.locate()?;
        let mut cmd = Command::new(&program);
        cmd.args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .stdout(if discard_stdout {
                Stdio::null()
            } else {
                Stdio::piped()
            });

        tracing::debug!("Running {:?}", cmd.as_std());

        let spawn_error = |e: std::io::Error| ToolError::Spawn {
            tool: self.command.clone(),
            error: e.to_string(),
        };
        let child = cmd.spawn().map_err(spawn_error)?;
        let output = child.wait_with_output().await.map_err(spawn_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ToolError::Failed {
                tool: self.command.clone(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(output)
    }
}
