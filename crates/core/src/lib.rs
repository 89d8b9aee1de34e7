//! Core URL building for ixurl
//!
//! Turns a resource path and a set of transformation parameters into a
//! canonical, optionally signed URL against an image-processing service.
//! Everything here is pure string work: nothing touches the network.
//!
//! # Example
//!
//! ```
//! use ixurl_core::{Param, UrlBuilder};
//!
//! let builder = UrlBuilder::new("demo.imgix.net")?.with_lib_param(false);
//! let url = builder.create_url(
//!     "path/to/image.jpg",
//!     &[Param::new("w", "320"), Param::with_values("auto", ["format", "compress"])],
//! );
//! assert_eq!(url, "https://demo.imgix.net/path/to/image.jpg?auto=format%2Ccompress&w=320");
//! # Ok::<(), ixurl_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod codec;
pub mod config;
pub mod error;
pub mod params;

pub use builder::{UrlBuilder, LIB_PARAM, LIB_VERSION, SIGNATURE_PARAM};
pub use config::{BuilderConfig, Scheme, SrcsetDefaults};
pub use error::{Error, Result};
pub use params::Param;
