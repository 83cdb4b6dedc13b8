// Main library entry point for fontindex
use thiserror::Error;

/// Error type for fontindex
#[derive(Error, Debug)]
pub enum FontindexError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// Remote catalog errors (HTTP status, transport, response shape)
    #[error("API error: {0}")]
    Api(String),

    /// Catalog record validation errors
    #[error("Record error: {0}")]
    Record(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other errors
    #[error("Error: {0}")]
    Other(String),
}

/// Result type for fontindex
pub type Result<T> = std::result::Result<T, FontindexError>;

pub mod cli;
pub mod collect;
pub mod font;
pub mod index;
pub mod query;
pub mod source;
pub mod utils;

// Implement From for common error types
impl From<std::io::Error> for FontindexError {
    fn from(err: std::io::Error) -> Self {
        FontindexError::Io(format!("{:?}: {}", err.kind(), err))
    }
}

// The request URL carries the API key, so it is dropped from the message
impl From<reqwest::Error> for FontindexError {
    fn from(err: reqwest::Error) -> Self {
        FontindexError::Api(err.without_url().to_string())
    }
}

impl From<String> for FontindexError {
    fn from(err: String) -> Self {
        FontindexError::Other(err)
    }
}

impl From<&str> for FontindexError {
    fn from(err: &str) -> Self {
        FontindexError::Other(err.to_string())
    }
}
