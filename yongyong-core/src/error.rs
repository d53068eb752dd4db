//! Error types for yongyong-core

use thiserror::Error;

/// Main error type for the yongyong-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog fixture is inconsistent (dangling author ids, duplicate ids, ...)
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Logging could not be initialized
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type alias for yongyong-core
pub type Result<T> = std::result::Result<T, Error>;
