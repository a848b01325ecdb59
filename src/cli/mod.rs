//! Command-line interface module
//!
//! This module handles argument parsing and output formatting, one
//! submodule per binary. It contains no business logic - that belongs in
//! the [`crate::core`] module.

pub mod bundle;
pub mod deps;
pub mod output;
pub mod scan;
