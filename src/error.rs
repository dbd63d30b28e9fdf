//! Custom error types for the contact directory
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contact directory operations
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Persistence errors for the data files
    #[error("Storage error: {0}")]
    Storage(String),

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Credential hashing or parsing errors
    #[error("Credential error: {0}")]
    Credentials(String),

    /// Login rejected by the access controller
    #[error("Login failed. Access denied.")]
    AccessDenied,

    /// The console input stream was closed
    #[error("End of input")]
    EndOfInput,
}

impl DirectoryError {
    /// Check if this error means the login was rejected
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied)
    }

    /// Check if the console ran out of input
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

impl From<std::io::Error> for DirectoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
