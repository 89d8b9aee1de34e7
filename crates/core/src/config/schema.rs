//! Configuration schema definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default lower bound for fluid-width srcsets.
pub const DEFAULT_MIN_WIDTH: u32 = 100;

/// Default upper bound for fluid-width srcsets.
pub const DEFAULT_MAX_WIDTH: u32 = 8192;

/// Default width tolerance for fluid-width srcsets.
pub const DEFAULT_TOLERANCE: f64 = 0.08;

/// URL scheme of generated URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTPS (default)
    #[default]
    Https,
}

impl Scheme {
    /// Scheme name as it appears in a URL
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root configuration schema
///
/// ```toml
/// domain = "demo.imgix.net"
/// scheme = "https"
/// token = "MYT0KEN"
/// include_lib_param = false
///
/// [srcset]
/// min_width = 100
/// max_width = 8192
/// tolerance = 0.08
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Service domain, without scheme or path
    pub domain: String,

    /// URL scheme
    #[serde(default)]
    pub scheme: Scheme,

    /// Signing token; URLs are unsigned when absent
    #[serde(default)]
    pub token: Option<String>,

    /// Add the `ixlib` informational parameter to every URL
    #[serde(default = "default_true")]
    pub include_lib_param: bool,

    /// Defaults for fluid-width srcset generation
    #[serde(default)]
    pub srcset: SrcsetDefaults,
}

impl BuilderConfig {
    /// Configuration for `domain` with every other field at its default.
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            scheme: Scheme::default(),
            token: None,
            include_lib_param: true,
            srcset: SrcsetDefaults::default(),
        }
    }
}

/// Fluid-width srcset defaults applied when a call does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SrcsetDefaults {
    /// Smallest generated width
    #[serde(default = "default_min_width")]
    pub min_width: u32,

    /// Largest generated width
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Allowed width difference between neighbouring candidates, in [0.01, 1)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for SrcsetDefaults {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            max_width: default_max_width(),
            tolerance: default_tolerance(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_width() -> u32 {
    DEFAULT_MIN_WIDTH
}

fn default_max_width() -> u32 {
    DEFAULT_MAX_WIDTH
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
