//! Error types for the soundboard.
//!
//! None of these ever reach the user as a dialog. Catalog and audio failures
//! are logged and the selection that caused them is abandoned; configuration
//! failures abort startup before the terminal is taken over.

use std::path::PathBuf;

use thiserror::Error;

/// Catalog lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A group or entry index fell outside the catalog.
    #[error("index out of range: group {group}{}", entry_suffix(.entry))]
    IndexOutOfRange { group: usize, entry: Option<usize> },
}

fn entry_suffix(entry: &Option<usize>) -> String {
    entry.map(|e| format!(", entry {e}")).unwrap_or_default()
}

/// Audio output failures.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The named audio asset is missing, unreadable or cannot be decoded.
    #[error("failed to load resource '{resource}': {reason}")]
    ResourceLoad { resource: String, reason: String },

    /// The output device refused to start playback.
    #[error("audio output error: {0}")]
    Output(String),
}

impl AudioError {
    pub fn resource_load(resource: &str, reason: impl ToString) -> Self {
        AudioError::ResourceLoad {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Why a row selection did not start playback.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Configuration and command line failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidArgument(String),
}
