//! Custom error types for directory-analyzer

use thiserror::Error;

/// Main error type for directory-analyzer operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Missing directory passed to the lister
    pub fn directory_not_found(path: impl std::fmt::Display) -> Self {
        Error::NotFound(format!("Directory not found: {}", path))
    }

    /// Missing file passed to the chunk reader
    pub fn file_not_found(path: impl std::fmt::Display) -> Self {
        Error::NotFound(format!("File not found: {}", path))
    }
}

/// Result type alias for directory-analyzer
pub type Result<T> = std::result::Result<T, Error>;
