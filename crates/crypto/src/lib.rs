//! Signing and encoding primitives for ixurl.
//!
//! This crate provides:
//! - URL signature digests (`s` parameter) and verification
//! - Constant-time comparison for security
//! - Unpadded URL-safe base64 for "problematic" query parameters

#![warn(missing_docs)]

mod encoding;
mod error;
mod signature;
mod timing;

pub use encoding::encode_base64_url;
pub use error::{CryptoError, Result};
pub use signature::{sign, verify_signature};
pub use timing::constant_time_compare;
