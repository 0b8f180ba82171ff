//! Error types for ntview

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the ntview pipeline and server.
///
/// The first six variants are the pipeline outcomes; `Template` and
/// `Server` belong to the web presenter and never pass through the
/// fail-soft boundary in `application::fetch_notes`.
#[derive(Debug, Error)]
pub enum NtviewError {
    #[error("Environment variable {0} is not set")]
    EnvVarMissing(String),

    #[error("Config file not found in any standard location")]
    ConfigNotFound,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("No data file path entry in {0}")]
    MissingField(PathBuf),

    #[error("Notes store not found at {0}")]
    DataFileNotFound(PathBuf),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type using NtviewError
pub type Result<T> = std::result::Result<T, NtviewError>;
