//! URL signature digests.
//!
//! The service authenticates a URL with a 128-bit MD5 digest over the
//! secret token, the encoded path and the encoded query string.

use md5::{Digest, Md5};

use crate::{CryptoError, Result};

/// Length of a hex-encoded signature.
const SIGNATURE_HEX_LEN: usize = 32;

/// Compute the signature for an already-encoded path and query.
///
/// # Arguments
/// * `token` - Secret signing token
/// * `path` - Percent-encoded path, including its leading `/`
/// * `query` - Percent-encoded, sorted query string without `?` (may be empty)
///
/// # Returns
/// Signature as lowercase hex string
///
/// # Example
/// ```
/// use ixurl_crypto::sign;
///
/// let sig = sign("MYT0KEN", "/path/to/image.jpg", "");
/// assert_eq!(sig, "c8bd1807209f7f1d96dd7123f92febb4");
/// ```
pub fn sign(token: &str, path: &str, query: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(token.as_bytes());
    hasher.update(path.as_bytes());
    if !query.is_empty() {
        hasher.update(b"?");
        hasher.update(query.as_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Verify a signature against the one computed for `path` and `query`.
///
/// # Returns
/// Ok(()) if signatures match, Err otherwise
pub fn verify_signature(token: &str, path: &str, query: &str, signature: &str) -> Result<()> {
    if signature.len() != SIGNATURE_HEX_LEN || !signature.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CryptoError::InvalidSignature(signature.to_string()));
    }

    let expected = sign(token, path, query);
    if crate::constant_time_compare(expected.as_bytes(), signature.to_ascii_lowercase().as_bytes()) {
        Ok(())
    } else {
        Err(CryptoError::SignatureMismatch)
    }
}
