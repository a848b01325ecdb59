//! Error types for cjdeps
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Errors reading the JSON inputs produced by external tooling
#[derive(Error, Debug)]
pub enum ManifestError {
    /// File could not be read
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    /// File is not valid JSON or lacks a required field
    #[error("Failed to parse '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// External tool errors (resolver update, compiler scan)
#[derive(Error, Debug)]
pub enum ToolError {
    /// Tool binary not found
    #[error("Tool '{tool}' not found in PATH")]
    NotFound { tool: String },

    /// Tool could not be started
    #[error("Failed to run '{tool}': {error}")]
    Spawn { tool: String, error: String },

    /// Tool exited unsuccessfully
    #[error("'{tool}' exited with {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// Tool output is not the expected JSON
    #[error("'{tool}' produced invalid output: {error}")]
    InvalidOutput { tool: String, error: String },
}

/// Package lookup errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No resolution entry carries the qualified package name
    #[error("Package {key} not found")]
    NotFound { key: String },
}

/// Build order verification errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    /// A dependency is listed before the package that requires it
    #[error("Invalid build order: '{package}' requires '{dependency}', which is listed before it")]
    DependencyAfterDependent { package: String, dependency: String },
}

/// Bundle assembly errors
#[derive(Error, Debug)]
pub enum BundleError {
    /// No input files given
    #[error("No source files to bundle")]
    NoInputs,

    /// Source could not be read or bundle could not be written
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Top-level cjdeps error type
#[derive(Error, Debug)]
pub enum CjdepsError {
    /// Manifest error
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Tool error
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Lookup error
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Order error
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Bundle error
    #[error(transparent)]
    Bundle(#[from] BundleError),
}
