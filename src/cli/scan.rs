//! `cjdeps-scan` - package dependencies from a compiler scan
//!
//! Asks the compiler which packages a source directory imports, without
//! consulting module-resolve.json, and prints them as artifact paths.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults::{DEFAULT_COMPILER, DEFAULT_SCAN_MODULE};
use crate::core::artifact::{render_joined, ArtifactLayout};
use crate::core::source::{DependencySource, ScanSource};
use crate::infra::compiler::Compiler;

const EXAMPLES: &str = "\
Examples:
    cjdeps-scan build src cjo graphs    # Artifacts package graphs depends on
    cjdeps-scan build src cjo           # Artifacts the root package depends on";

/// Scan a package's sources for the artifacts it depends on
#[derive(Parser, Debug)]
#[command(name = "cjdeps-scan")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct ScanCli {
    /// Directory prefix of package artifacts
    pub build_dir: String,

    /// Source directory holding one subdirectory per package
    pub src_dir: PathBuf,

    /// Extension of package artifacts
    pub ext: String,

    /// Package to scan; omit for the module's root package
    pub package: Option<String>,

    /// Compiler command used for the scan
    #[arg(long, env = "CJDEPS_COMPILER", default_value = DEFAULT_COMPILER)]
    pub compiler: String,

    /// Module name passed to the compiler
    #[arg(long, default_value = DEFAULT_SCAN_MODULE)]
    pub module_name: String,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ScanCli {
    /// Execute the scan, returning the line to print
    pub async fn run(self) -> Result<String> {
        let compiler = Compiler::new(self.compiler.as_str(), self.module_name.as_str());
        let source = ScanSource::new(compiler, self.src_dir);
        let layout = ArtifactLayout::new(self.build_dir.as_str(), self.ext.as_str());

        let package = self.package.as_deref().unwrap_or_default();
        let artifacts = source.artifacts(&layout, package).await?;
        tracing::info!("Found {} dependencies", artifacts.len());
        Ok(render_joined(&artifacts))
    }
}
