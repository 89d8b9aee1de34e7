//! Builder configuration schema and file loading
//!
//! A [`BuilderConfig`] can be written in TOML and loaded from disk, or built
//! in code and handed to [`crate::UrlBuilder::from_config`].

mod loader;
mod schema;

pub use loader::{find_config_file, CONFIG_CANDIDATES};
pub use schema::*;
