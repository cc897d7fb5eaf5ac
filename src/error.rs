//! Error handling for sea-state report analysis.
//!
//! Only configuration and input failures surface here. Rows that cannot be
//! parsed are skipped inside the parser and counted in its statistics.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeaStateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Invalid input pattern '{pattern}': {reason}")]
    InvalidInputPattern { pattern: String, reason: String },

    #[error("Directory traversal error: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Processing failed for file: {path} - {reason}")]
    ProcessingFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Invalid configuration file: {path} - {reason}")]
    ConfigFile { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SeaStateError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeaStateError>;
