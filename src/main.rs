//! cjdeps - package dependencies and build order for Cangjie modules
//!
//! Entry point for the `cjdeps` command-line application.

use anyhow::Result;

use cjdeps::cli::deps::DepsCli;
use cjdeps::cli::output::{display_error, init_tracing, parse_or_usage};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli: DepsCli = parse_or_usage();
    init_tracing(cli.verbose);

    // Print the answer or fail the build rule
    match cli.run().await {
        Ok(line) => {
            println!("{line}");
            Ok(())
        }
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
