//! Optional file logging.
//!
//! The TUI owns stdout, so log lines only go anywhere when a file is given.
//! Verbosity follows `RUST_LOG` and defaults to `info`.

use color_eyre::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber writing to `log_file`, if any.
///
/// # Errors
/// Returns an error if the file cannot be opened or a subscriber is
/// already installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("failed to install logger: {e}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
