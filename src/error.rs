// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReclocError {
    #[error("locator length must be positive (got {length})")]
    InvalidLength { length: usize },

    #[error("locator not found: {locator}")]
    LocatorNotFound { locator: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReclocError>;
