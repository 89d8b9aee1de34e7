//! URL-safe base64 for query values that would not survive percent-encoding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Encode raw bytes as unpadded URL-safe base64 (`A-Za-z0-9-_`).
///
/// # Example
/// ```
/// use ixurl_crypto::encode_base64_url;
///
/// let encoded = encode_base64_url("https://assets.imgix.net/logo.png");
/// assert_eq!(encoded, "aHR0cHM6Ly9hc3NldHMuaW1naXgubmV0L2xvZ28ucG5n");
/// ```
pub fn encode_base64_url(raw: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(raw.as_ref())
}
