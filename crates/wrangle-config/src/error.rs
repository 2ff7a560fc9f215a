//! Error types for the config crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading configuration sources.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension maps to no supported format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// The source is not valid JSON.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The source is not valid YAML.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
