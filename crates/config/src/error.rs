use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while locating, reading, or parsing a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension maps to no known format.
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The file parsed but the contents are invalid.
    #[error("invalid config {path}: {message}")]
    Invalid {
        /// Path of the offending file
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },
}

/// Result alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
