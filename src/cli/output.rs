//! Output formatting and diagnostics
//!
//! Standard output carries exactly the rendered answer, since build rules
//! capture it. Logs, errors and argument diagnostics go to stderr; usage
//! text goes to stdout.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for the given verbosity.
///
/// Defaults to warnings; `-v` enables info and `-vv` debug output.
/// `RUST_LOG` directives are honoured on top.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse arguments, or print usage and exit with status 1.
///
/// `--help` and `--version` keep clap's behaviour and exit 0.
pub fn parse_or_usage<T: Parser>() -> T {
    match T::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", e.render());
            println!("{}", T::command().render_help());
            std::process::exit(1);
        }
    }
}

/// Display an error and its causes on stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
