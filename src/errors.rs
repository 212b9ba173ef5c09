// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CssDtsError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("failed to generate declaration for {path:?}: {reason}")]
    Generation { path: PathBuf, reason: String },

    /// Batch build finished with at least one failed file.
    ///
    /// `first` carries the message of the first failure in path order;
    /// every failure has already been logged individually.
    #[error("build failed: {failed} of {total} stylesheet(s) could not be processed (first: {first})")]
    BuildFailed {
        failed: usize,
        total: usize,
        first: String,
    },

    #[error("protocol violation: {0}")]
    ProtocolViolation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, CssDtsError>;
