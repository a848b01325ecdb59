//! Module manifest (module.json) and resolution document (module-resolve.json)
//!
//! Both files are produced by external tooling and treated as read-only.
//! The resolution document's entry order is meaningful: every package's
//! dependencies appear after it, and the last entry is the module root.

use serde::{Deserialize, Serialize};

/// The compiling project's identity (module.json)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Module {
    /// Module name, used as the namespace prefix of package names
    pub name: String,
}

impl Module {
    /// Create a module with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Parse from JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Fully-qualified name of one of this module's packages
    pub fn qualify(&self, package_local_name: &str) -> String {
        format!("{}/{}", self.name, package_local_name)
    }
}

/// Resolution document (module-resolve.json)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionDocument {
    /// Package entries in resolver order
    pub resolves: Vec<PackageEntry>,
}

/// One resolved package and its direct dependencies
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackageEntry {
    /// Qualified package name, `<module>/<package>`
    pub package_name: String,

    /// Direct dependencies, in resolver order
    pub requires: Vec<String>,
}

impl PackageEntry {
    /// Create a package entry
    pub fn new(package_name: impl Into<String>, requires: Vec<String>) -> Self {
        Self {
            package_name: package_name.into(),
            requires,
        }
    }
}

impl ResolutionDocument {
    /// Create a document from entries in resolver order
    pub fn new(resolves: Vec<PackageEntry>) -> Self {
        Self { resolves }
    }

    /// Parse from JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Find the first entry with the given qualified name
    pub fn find(&self, package_name: &str) -> Option<&PackageEntry> {
        self.resolves.iter().find(|e| e.package_name == package_name)
    }

    /// Package names in document order
    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.resolves.iter().map(|e| e.package_name.as_str())
    }

    /// Check if the document has no entries
    pub fn is_empty(&self) -> bool {
        self.resolves.is_empty()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.resolves.len()
    }
}
