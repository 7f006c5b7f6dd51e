//! Error types for rosterline-core.
//!
//! The normalizers themselves never fail. Errors only arise at the
//! boundary: reading input files, parsing JSON text, and loading config.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for rosterline-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rosterline-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error tied to a specific file
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Input text could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates an I/O error carrying the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
