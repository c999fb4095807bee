//! Layered settings: built-in defaults, then an optional JSON settings file,
//! then command line overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::CliConfig;
use crate::error::ConfigError;

const APP_DIR: &str = "soundboard-tui";

fn default_sounds_dir() -> PathBuf {
    PathBuf::from("sounds")
}

fn default_volume() -> f32 {
    1.0
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the bundled clips
    #[serde(default = "default_sounds_dir")]
    pub sounds_dir: PathBuf,
    /// Output volume, 0.0 to 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Log file (default: <data dir>/soundboard-tui/soundboard.log)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sounds_dir: default_sounds_dir(),
            volume: default_volume(),
            log_file: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// ~/.config/soundboard-tui/config.json (platform equivalent elsewhere)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
    }

    /// Build settings for this run.
    ///
    /// An explicit `--config` file must exist; the default location is
    /// optional.
    pub fn resolve(cli: &CliConfig) -> Result<Self, ConfigError> {
        let base = match &cli.config_path {
            Some(path) => Self::load(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::load(&path)?,
                None => Self::default(),
            },
        };
        Ok(base.with_overrides(cli))
    }

    /// Apply command line overrides on top of file settings
    pub fn with_overrides(mut self, cli: &CliConfig) -> Self {
        if let Some(dir) = &cli.sounds_dir {
            self.sounds_dir = dir.clone();
        }
        if let Some(volume) = cli.volume {
            self.volume = volume;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
        self.volume = self.volume.clamp(0.0, 1.0);
        self
    }

    /// Log file location, falling back to the platform data directory
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("soundboard.log"))
        })
    }
}
