//! Package dependency lookup
//!
//! Finds a package's entry in the resolution document and returns its
//! direct dependencies, unchanged and in resolver order.

use crate::core::module::{Module, ResolutionDocument};
use crate::error::LookupError;

/// Direct dependencies of `<module>/<package_local_name>`
pub fn lookup<'a>(
    document: &'a ResolutionDocument,
    module: &Module,
    package_local_name: &str,
) -> Result<&'a [String], LookupError> {
    let key = module.qualify(package_local_name);
    tracing::debug!("Looking up {key} among {} packages", document.len());

    document
        .find(&key)
        .map(|entry| entry.requires.as_slice())
        .ok_or(LookupError::NotFound { key })
}
