//! Custom error types for tobuddy
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::config::Invalidity;

/// The main error type for tobuddy operations
#[derive(Error, Debug)]
pub enum TobuddyError {
    /// The accrual configuration failed validation
    #[error("{0}")]
    InvalidConfig(Invalidity),

    /// Settings file errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl TobuddyError {
    /// Check if this is an invalid configuration error
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}

impl From<Invalidity> for TobuddyError {
    fn from(invalidity: Invalidity) -> Self {
        Self::InvalidConfig(invalidity)
    }
}

impl From<std::io::Error> for TobuddyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for tobuddy operations
pub type TobuddyResult<T> = Result<T, TobuddyError>;
