//! Logging setup.
//!
//! The terminal belongs to the UI, so log events go to a file. `RUST_LOG`
//! takes precedence over the configured filter.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Build the event filter from `RUST_LOG`, falling back to `directive`
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing to `path`.
///
/// Failure is not fatal: the soundboard runs without logs and the reason is
/// returned for the caller to report.
pub fn init_logging(path: &Path, directive: &str) -> anyhow::Result<()> {
    let file = open_log_file(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
