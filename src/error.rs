//! Error types for Bazaar
//!
//! The domain layer never fails; these errors only surface at the I/O edges
//! (configuration files, category catalogs and basket scripts).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Bazaar operations
pub type BazaarResult<T> = Result<T, BazaarError>;

/// Main error type for Bazaar operations
#[derive(Error, Debug)]
pub enum BazaarError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Category catalog JSON could not be decoded
    #[error("invalid category catalog in {file}: {message}")]
    InvalidCatalog { file: PathBuf, message: String },

    /// Basket action script could not be decoded
    #[error("invalid basket script in {file}: {message}")]
    InvalidScript { file: PathBuf, message: String },
}
