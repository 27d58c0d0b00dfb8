//! Errors raised by the `escapes` command-line front end.
//!
//! The sequence builders themselves cannot fail.

use std::path::PathBuf;

/// Errors that can occur while resolving and printing a sequence.
#[derive(Debug, thiserror::Error)]
pub enum EscapesError {
    #[error("Unknown sequence: {name} (run `escapes list` to see available names)")]
    UnknownSequence { name: String },

    #[error("Failed to read image {}: {source}", path.display())]
    ReadImage {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,
}
