//! Domain-specific error types for tezaurs-conj

use thiserror::Error;

/// Main error type for the conjugation filler
#[derive(Error, Debug)]
pub enum ConjError {
    #[error("Input error: {message}")]
    Input { message: String },

    #[error("Lookup error: {message}")]
    Lookup { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for ConjError {
    fn from(err: serde_json::Error) -> Self {
        ConjError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ConjError {
    fn from(err: reqwest::Error) -> Self {
        ConjError::Lookup {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

impl From<std::io::Error> for ConjError {
    fn from(err: std::io::Error) -> Self {
        ConjError::Input {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConjError>;
