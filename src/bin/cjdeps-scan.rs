//! cjdeps-scan - package dependencies from a compiler dependency scan
//!
//! Entry point for the `cjdeps-scan` command-line application.

use anyhow::Result;

use cjdeps::cli::output::{display_error, init_tracing, parse_or_usage};
use cjdeps::cli::scan::ScanCli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli: ScanCli = parse_or_usage();
    init_tracing(cli.verbose);

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
