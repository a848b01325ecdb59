//! cjdeps - build-order and dependency queries for Cangjie module builds
//!
//! Answers the two questions a makefile asks while compiling a module
//! package by package: which artifacts does a package depend on, and in
//! which order must packages be built.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (lookup, ordering, rendering)
//! - [`infra`] - Infrastructure layer (filesystem, external tools)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
