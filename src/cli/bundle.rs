//! `cjbundle` - concatenate source files into one bundle
//!
//! Files are read relative to the source directory and the bundle is
//! written there too.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::defaults::{
    DEFAULT_BUNDLE_IMPORT, DEFAULT_BUNDLE_OUTPUT, DEFAULT_BUNDLE_PACKAGE,
};
use crate::core::bundle::{write_bundle, BundleHeader};

/// Bundle several source files into a single package
#[derive(Parser, Debug)]
#[command(name = "cjbundle")]
#[command(author, version, about, long_about = None)]
pub struct BundleCli {
    /// Source directory the files and output are relative to
    #[arg(long, value_name = "DIR")]
    pub src: PathBuf,

    /// Output file name
    #[arg(short, long, default_value = DEFAULT_BUNDLE_OUTPUT)]
    pub output: PathBuf,

    /// Package the bundle declares
    #[arg(long, default_value = DEFAULT_BUNDLE_PACKAGE)]
    pub package: String,

    /// Import the bundle declares (repeatable)
    #[arg(long = "import", value_name = "PATH", default_values_t = [DEFAULT_BUNDLE_IMPORT.to_string()])]
    pub imports: Vec<String>,

    /// Files to bundle, in order
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl BundleCli {
    /// Write the bundle, returning its path
    pub fn run(self) -> Result<PathBuf> {
        let header = BundleHeader {
            package: self.package,
            imports: self.imports,
        };
        Ok(write_bundle(&self.src, &self.output, &header, &self.files)?)
    }
}
