//! Error types for type generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, TypegenError>;

/// Type generation errors
///
/// Individual schema nodes never produce an error; they degrade to the opaque
/// object type. Only document-level problems surface here.
#[derive(Error, Debug)]
pub enum TypegenError {
    #[error("Could not find an object definition for root key '{key}'")]
    MissingRoot { key: String },

    #[error("Unsupported schema document format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Generated output differs from {path}")]
    Drift { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
