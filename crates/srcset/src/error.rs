//! Error types for the srcset crate.

use thiserror::Error;

/// Result type alias for srcset operations.
pub type Result<T> = std::result::Result<T, SrcsetError>;

/// Errors that can occur during srcset generation.
#[derive(Debug, Error, PartialEq)]
pub enum SrcsetError {
    /// Malformed width bounds or tolerance
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
