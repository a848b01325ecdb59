//! Core business logic module
//!
//! Business logic over the resolver's and compiler's outputs. Process and
//! filesystem primitives live in [`crate::infra`]; [`source`] is the seam
//! where a caller picks which tool answers a dependency query.
//!
//! # Submodules
//!
//! - [`module`] - Module manifest and resolution document model
//! - [`artifact`] - Artifact paths and output line rendering
//! - [`lookup`] - Per-package dependency lookup
//! - [`order`] - Build order rendering and verification
//! - [`scan`] - Compiler scan reports
//! - [`source`] - Manifest and scan dependency sources
//! - [`bundle`] - Source file bundling

pub mod artifact;
pub mod bundle;
pub mod lookup;
pub mod module;
pub mod order;
pub mod scan;
pub mod source;
