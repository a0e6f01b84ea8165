//! waitlist - manage named wait lists of pending entries
//!
//! This is the main entry point for the waitlist command-line application.
//! It initializes logging and reports fatal errors.

use clap::Parser;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};
use waitlist::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // RUST_LOG wins; otherwise the configured level, or debug with --verbose
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run_with(&cli, config) {
        tracing::debug!(category = e.category(), "command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
