//! Error types for option loading and pattern compilation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid {field} pattern '{pattern}': {message}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        message: String,
    },

    #[error("invalid config value for '{field}': {hint}")]
    InvalidValue { field: String, hint: String },

    #[error("failed to load configuration: {0}")]
    Load(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
