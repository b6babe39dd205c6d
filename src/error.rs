//! Error types for the Agenda client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the Agenda directory service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Connection refused, DNS failure, timeout or any lower-level I/O problem
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived but its status is outside the 2xx class
    #[error("Unexpected status {status}: {message}")]
    Protocol { status: u16, message: String },

    /// A representation could not be encoded or decoded
    #[error("XML serialization error: {0}")]
    Serialization(String),

    /// No contact in the directory carries the requested email
    #[error("No contact with email: {0}")]
    ResolutionMiss(String),
}

impl DirectoryError {
    /// Whether this error is a legitimate "not found" rather than a failure
    /// of the remote service.
    pub fn is_miss(&self) -> bool {
        matches!(self, DirectoryError::ResolutionMiss(_))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
