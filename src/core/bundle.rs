//! Source bundling
//!
//! Concatenates several Cangjie source files into one compilation unit
//! under a single package declaration. Each file's own package and import
//! declarations are dropped; the bundle declares its own.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::config::defaults::{DEFAULT_BUNDLE_IMPORT, DEFAULT_BUNDLE_PACKAGE};
use crate::error::{BundleError, CjdepsError};
use crate::infra::filesystem::{read_file, write_file};

/// Width of the banner rule, in asterisks
const BANNER_WIDTH: usize = 61;

fn declaration_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(?:(?:public|protected|internal)\s+)?(?:macro\s+package|package|(?:from\s+\S+\s+)?import)\s")
            .expect("Invalid declaration pattern")
    })
}

/// Whether a source line is a package or import declaration
pub fn is_declaration(line: &str) -> bool {
    declaration_pattern().is_match(line)
}

/// Remove package and import declarations, keeping line endings
pub fn strip_declarations(source: &str) -> String {
    source
        .split_inclusive('\n')
        .filter(|line| !is_declaration(line))
        .collect()
}

/// Header written at the top of a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleHeader {
    /// Package declared by the bundle
    pub package: String,
    /// Imports declared by the bundle
    pub imports: Vec<String>,
}

impl Default for BundleHeader {
    fn default() -> Self {
        Self {
            package: DEFAULT_BUNDLE_PACKAGE.to_string(),
            imports: vec![DEFAULT_BUNDLE_IMPORT.to_string()],
        }
    }
}

/// Accumulates bundle sections in order
#[derive(Debug)]
pub struct Bundle {
    content: String,
}

impl Bundle {
    /// Start a bundle with its package and import declarations
    pub fn new(header: &BundleHeader) -> Self {
        let mut content = format!("package {}\n", header.package);
        for import in &header.imports {
            content.push_str(&format!("import {import}\n"));
        }
        Self { content }
    }

    /// Append one source file under a banner naming it
    pub fn add_section(&mut self, name: &str, source: &str) {
        let rule = "*".repeat(BANNER_WIDTH);
        self.content.push('\n');
        self.content.push_str(&format!("/{rule}\n"));
        self.content.push_str(&format!(" * {name}\n"));
        self.content.push_str(&format!(" {rule}/\n"));
        self.content.push('\n');
        self.content.push_str(&strip_declarations(source));
    }

    /// Finished bundle text
    pub fn finish(self) -> String {
        self.content
    }
}

/// Assemble `files` under `src` into `src/output`
pub fn write_bundle(
    src: &Path,
    output: &Path,
    header: &BundleHeader,
    files: &[String],
) -> Result<PathBuf, CjdepsError> {
    if files.is_empty() {
        return Err(BundleError::NoInputs.into());
    }

    let mut bundle = Bundle::new(header);
    for name in files {
        let source = read_file(&src.join(name)).map_err(BundleError::from)?;
        tracing::debug!("Bundling {name}");
        bundle.add_section(name, &source);
    }

    let path = src.join(output);
    write_file(&path, &bundle.finish()).map_err(BundleError::from)?;
    tracing::info!("Wrote {} files to {}", files.len(), path.display());
    Ok(path)
}
