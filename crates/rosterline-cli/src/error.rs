//! Error types for rosterline-cli

use thiserror::Error;

/// Result type alias for rosterline-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rosterline-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from rosterline-core
    #[error("Core error: {0}")]
    Core(#[from] rosterline_core::Error),

    /// Config file could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Config could not be serialized
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Output could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Core(rosterline_core::Error::config(message))
    }

    /// Creates an I/O error carrying the offending path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<std::path::Path>) -> Self {
        Error::Core(rosterline_core::Error::io_with_path(source, path))
    }
}
