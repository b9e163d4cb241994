//! Error handling for subforge

use thiserror::Error;

/// Main error type for subforge
#[derive(Error, Debug)]
pub enum SubforgeError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resolver error: {message}")]
    Resolver { message: String },

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl SubforgeError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a resolver error
    pub fn resolver(message: impl Into<String>) -> Self {
        Self::Resolver {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for SubforgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<hickory_resolver::error::ResolveError> for SubforgeError {
    fn from(err: hickory_resolver::error::ResolveError) -> Self {
        Self::resolver(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SubforgeError>;
