//! `cjdeps` - package dependencies and build order from module-resolve.json
//!
//! Prints one line for a makefile to consume:
//!
//! - `--package <NAME>`: the artifacts package `<module>/<NAME>` depends on
//! - `--order`: every package of the module in build order

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use crate::config::defaults::{DEFAULT_ARTIFACT_EXT, DEFAULT_BUILD_DIR, DEFAULT_RESOLVER};
use crate::core::artifact::{render_trailing, ArtifactLayout};
use crate::core::order::{order, verify_order};
use crate::core::source::{DependencySource, ManifestSource};
use crate::infra::project::{load_module, load_resolution};
use crate::infra::resolver::Resolver;

const EXAMPLES: &str = "\
Examples:
    cjdeps --package graphs    # Find dependencies of package graphs
    cjdeps --order             # Get the dependency order of the module";

/// Query module-resolve.json for package dependencies and build order
#[derive(Parser, Debug)]
#[command(name = "cjdeps")]
#[command(author, version, about, long_about = None, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("mode").required(true).args(["package", "order"])))]
pub struct DepsCli {
    /// Print the build artifacts package <NAME> depends on
    #[arg(long, value_name = "NAME")]
    pub package: Option<String>,

    /// Print the module's packages in build order
    #[arg(long)]
    pub order: bool,

    /// With --order, fail if a dependency is listed before its dependent
    #[arg(long, conflicts_with = "package")]
    pub strict: bool,

    /// Read module-resolve.json as is instead of refreshing it first
    #[arg(long)]
    pub skip_update: bool,

    /// Project directory holding module.json and module-resolve.json
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Resolver command used to refresh module-resolve.json
    #[arg(long, env = "CJDEPS_RESOLVER", default_value = DEFAULT_RESOLVER)]
    pub resolver: String,

    /// Directory prefix of package artifacts
    #[arg(long, default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: String,

    /// Extension of package artifacts
    #[arg(long, default_value = DEFAULT_ARTIFACT_EXT)]
    pub ext: String,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DepsCli {
    /// Execute the query, returning the line to print
    pub async fn run(self) -> Result<String> {
        let project_dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to determine current directory")?,
        };

        let resolver = (!self.skip_update).then(|| Resolver::new(self.resolver.as_str()));
        let document = load_resolution(&project_dir, resolver.as_ref()).await?;

        if let Some(package) = &self.package {
            let module = load_module(&project_dir)?;
            tracing::info!("Resolving dependencies of {}", module.qualify(package));

            let source = ManifestSource::new(document, module);
            let layout = ArtifactLayout::new(self.build_dir.as_str(), self.ext.as_str());
            let artifacts = source.artifacts(&layout, package).await?;
            return Ok(render_trailing(&artifacts));
        }

        if self.strict {
            verify_order(&document)?;
        }
        Ok(render_trailing(&order(&document)))
    }
}
