//! Error types for URL building and configuration.
//!
//! Encoding itself is total over all strings, so every error here is a
//! configuration problem surfaced at construction time.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a [`crate::UrlBuilder`].
#[derive(Debug, Error)]
pub enum Error {
    /// Empty or malformed domain, or another invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Config file could not be parsed
    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse {
        /// File that failed to parse
        path: String,
        /// Parser message
        message: String,
    },

    /// IO error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Signature check on a generated URL failed
    #[error("Signature error: {0}")]
    Signature(#[from] ixurl_crypto::CryptoError),
}

impl Error {
    /// Shorthand for a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check whether this error came from an invalid configuration value
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::ConfigParse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_display() {
        let err = Error::configuration("domain must not be empty");
        assert_eq!(err.to_string(), "Configuration error: domain must not be empty");
        assert!(err.is_configuration());
    }

    #[test]
    fn test_io_is_not_configuration() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_configuration());
    }
}
