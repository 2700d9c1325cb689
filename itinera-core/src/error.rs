//! Error types for itinera

use thiserror::Error;

/// The main error type for itinera operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (missing API keys, bad settings file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Itinerary dataset missing or corrupt
    #[error("Data unavailable: {0}")]
    Data(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Session management errors
    #[error("Session error: {0}")]
    Session(String),

    /// Not found errors (day number or activity id absent)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for itinera operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
