//! Error types for the kumbu ecosystem.

use thiserror::Error;

/// Errors that can occur in kumbu operations.
#[derive(Error, Debug)]
pub enum KumbuError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for kumbu operations.
pub type KumbuResult<T> = Result<T, KumbuError>;
