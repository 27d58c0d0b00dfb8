//! Configuration for the `escapes` command.
//!
//! Loaded from `<config dir>/escapes/config.toml` unless a path is given.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::EscapesError;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// How sequences are written to stdout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the visible, backslash-escaped form instead of raw bytes.
    pub escaped: bool,
    /// Append a newline after the sequence.
    pub newline: bool,
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, EscapesError> {
        let dir = dirs::config_dir().ok_or(EscapesError::NoConfigDir)?;
        Ok(dir.join("escapes").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. The default location is optional and
    /// falls back to [`Config::default`] when the file is missing.
    pub fn load(path: Option<&Path>) -> Result<Self, EscapesError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = match Self::config_path() {
                    Ok(path) => path,
                    Err(_) => return Ok(Self::default()),
                };
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from(path: &Path) -> Result<Self, EscapesError> {
        let content = fs::read_to_string(path).map_err(|source| EscapesError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| EscapesError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
