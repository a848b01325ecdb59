//! Dependency sources
//!
//! A package's direct dependencies can come from the resolver's manifest
//! or from a fresh compiler scan of its sources. Callers pick the source;
//! rendering to artifact paths is shared.

use std::path::PathBuf;

use crate::core::artifact::ArtifactLayout;
use crate::core::lookup::lookup;
use crate::core::module::{Module, ResolutionDocument};
use crate::core::scan::package_dir;
use crate::error::CjdepsError;
use crate::infra::compiler::Compiler;

/// Something that can list a package's direct dependencies
#[allow(async_fn_in_trait)]
pub trait DependencySource {
    /// Direct dependencies of a package, by local name, in source order
    async fn dependencies(&self, package_local_name: &str) -> Result<Vec<String>, CjdepsError>;

    /// Direct dependencies rendered as artifact paths
    async fn artifacts(
        &self,
        layout: &ArtifactLayout,
        package_local_name: &str,
    ) -> Result<Vec<String>, CjdepsError> {
        let dependencies = self.dependencies(package_local_name).await?;
        Ok(layout.paths_for(&dependencies))
    }
}

/// Dependencies from a resolution document
#[derive(Debug, Clone)]
pub struct ManifestSource {
    document: ResolutionDocument,
    module: Module,
}

impl ManifestSource {
    /// Create a source over a loaded document and module
    pub fn new(document: ResolutionDocument, module: Module) -> Self {
        Self { document, module }
    }
}

impl DependencySource for ManifestSource {
    async fn dependencies(&self, package_local_name: &str) -> Result<Vec<String>, CjdepsError> {
        Ok(lookup(&self.document, &self.module, package_local_name)?.to_vec())
    }
}

/// Dependencies from a compiler scan of the package sources
#[derive(Debug, Clone)]
pub struct ScanSource {
    compiler: Compiler,
    src_dir: PathBuf,
}

impl ScanSource {
    /// Create a source scanning packages under `src_dir`
    pub fn new(compiler: Compiler, src_dir: impl Into<PathBuf>) -> Self {
        Self {
            compiler,
            src_dir: src_dir.into(),
        }
    }
}

impl DependencySource for ScanSource {
    async fn dependencies(&self, package_local_name: &str) -> Result<Vec<String>, CjdepsError> {
        let dir = package_dir(&self.src_dir, package_local_name);
        let report = self.compiler.scan(&dir).await?;
        Ok(report.package_names())
    }
}
