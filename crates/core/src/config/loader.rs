//! Configuration file loading

use super::schema::BuilderConfig;
use crate::error::{Error, Result};
use std::path::Path;

/// Standard config file locations, checked in order.
pub const CONFIG_CANDIDATES: [&str; 3] = [".ixurl.toml", "ixurl.toml", ".config/ixurl.toml"];

impl BuilderConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::ConfigParse { message, .. } => Error::ConfigParse {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load the first config file found in the standard locations, if any
    pub fn find_and_load() -> Result<Option<Self>> {
        match find_config_file() {
            Some(path) => {
                tracing::debug!(path = %path, "Loading builder config");
                Self::load(&path).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// Find a configuration file in the standard locations
pub fn find_config_file() -> Option<String> {
    CONFIG_CANDIDATES
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}
