//! Error types for assetprune
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for assetprune operations
pub type AssetResult<T> = Result<T, AssetError>;

/// Main error type for assetprune operations
#[derive(Error, Debug)]
pub enum AssetError {
    /// Output directory does not exist (cannot enumerate, cannot clean)
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest file exists but is not a JSON object of strings
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Duration string could not be parsed
    #[error("invalid duration '{input}': expected seconds or a number with s/m/h/d/w suffix")]
    InvalidDuration { input: String },
}
