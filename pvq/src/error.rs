//! Error types for the pvq CLI.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Selector(#[from] pvsel::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read records from {source_name}: {error}")]
    Records {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Unknown output format \"{0}\" (expected table, json or names)")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, Error>;
