//! Tracing setup for the CLI.
//!
//! Logs go to stderr so that `--stdout` output stays a clean calendar.
//! `RUST_LOG` takes precedence over the `-v` flags.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the number of `-v` flags to a log level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) -> Result<()> {
    let level = level_for(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("icsgen={level},icsgen_core={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .with_target(verbosity > 1)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
