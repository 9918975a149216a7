use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default upper bound on the number of versions in an upgrade range
pub const DEFAULT_MAX_RANGE_LEN: u64 = 10_000;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "OOBMIGRATION_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub range: RangeConfig,
    pub log: LogConfig,
}

/// Upgrade range limits
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RangeConfig {
    /// Maximum number of versions a single upgrade range may contain
    pub max_len: u64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_RANGE_LEN,
        }
    }
}

/// Logging output
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Write logs to [`log_path`] instead of stderr
    pub file: bool,
    /// Emit JSON lines instead of human-readable text
    pub json: bool,
}

impl Config {
    /// Load configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }
}

/// Returns the path to the data directory for oobmigration.
/// Uses $XDG_DATA_HOME/oobmigration if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/oobmigration,
/// or ./oobmigration if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("oobmigration.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("oobmigration")
}
