//! Error types for Treepick
//!
//! The tree engine itself never fails; these cover the outer surface
//! (item files, config files, argument values).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Treepick operations
pub type TreepickResult<T> = Result<T, TreepickError>;

/// Main error type for Treepick operations
#[derive(Error, Debug)]
pub enum TreepickError {
    /// Item file does not exist
    #[error("item file not found: {path}")]
    ItemFileNotFound { path: PathBuf },

    /// Item file is not a valid JSON array of items
    #[error("invalid item file {file}: {message}")]
    InvalidItems { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Unrecognized selection mode
    #[error("unknown selection mode '{value}' (expected all, parent or child)")]
    UnknownSelectionMode { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
