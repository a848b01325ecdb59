//! cjbundle - concatenate Cangjie sources into a single package file
//!
//! Entry point for the `cjbundle` command-line application.

use anyhow::Result;

use cjdeps::cli::bundle::BundleCli;
use cjdeps::cli::output::{display_error, init_tracing, parse_or_usage};

fn main() -> Result<()> {
    let cli: BundleCli = parse_or_usage();
    init_tracing(cli.verbose);

    if let Err(e) = cli.run() {
        display_error(&e);
        std::process::exit(1);
    }
    Ok(())
}
