//! qrgen CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, initialise logging,
//! dispatch, and exit non-zero on any failure.

use clap::Parser;
use tracing::Level;

use qrgen::cli::{run, Cli};

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_target(false).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
