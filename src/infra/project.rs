//! Project inputs
//!
//! Loads `module.json` and `module-resolve.json` from a project directory.
//! Both are read fresh on every call.

use std::path::Path;

use crate::config::defaults::{MODULE_FILE, RESOLVE_FILE};
use crate::core::module::{Module, ResolutionDocument};
use crate::error::CjdepsError;
use crate::infra::filesystem::read_json;
use crate::infra::resolver::Resolver;

/// Load the module manifest
pub fn load_module(project_dir: &Path) -> Result<Module, CjdepsError> {
    let module: Module = read_json(&project_dir.join(MODULE_FILE))?;
    tracing::debug!("Loaded module '{}'", module.name);
    Ok(module)
}

/// Load the resolution document, refreshing it first when a resolver is given
pub async fn load_resolution(
    project_dir: &Path,
    resolver: Option<&Resolver>,
) -> Result<ResolutionDocument, CjdepsError> {
    if let Some(resolver) = resolver {
        resolver.update(project_dir).await?;
    } else {
        tracing::info!("Skipping resolver update, reading existing {RESOLVE_FILE}");
    }

    let document: ResolutionDocument = read_json(&project_dir.join(RESOLVE_FILE))?;
    tracing::debug!("Loaded {} resolved packages", document.len());
    Ok(document)
}
