//! Path and query string encoding.
//!
//! Both codecs escape everything outside `A-Za-z0-9-_.~`. Query values
//! additionally map space to `+`, so a literal `+` anywhere in the output is
//! always `%2B`.

use ixurl_crypto::encode_base64_url;

use crate::params::Param;

/// Percent-encode a resource path.
///
/// - At most one leading `/` is stripped and restored afterwards.
/// - A path that already carries an escaped separator (`%2F`) is a
///   pre-encoded proxy URL and is kept verbatim.
/// - A path starting with `http://` or `https://` is a raw proxy URL and is
///   encoded as one segment, `/` and `:` included.
/// - Anything else is encoded segment by segment, keeping `/`.
///
/// An empty path encodes to an empty string.
///
/// # Example
/// ```
/// use ixurl_core::codec::encode_path;
///
/// assert_eq!(encode_path("/users/1.png"), "/users/1.png");
/// assert_eq!(encode_path("E+P-003_D.jpeg"), "/E%2BP-003_D.jpeg");
/// ```
pub fn encode_path(raw: &str) -> String {
    let path = raw.strip_prefix('/').unwrap_or(raw);
    if path.is_empty() {
        return String::new();
    }

    if is_pre_encoded(path) {
        return format!("/{path}");
    }

    if is_proxy_url(path) {
        return format!("/{}", urlencoding::encode(path));
    }

    let segments: Vec<_> = path.split('/').map(urlencoding::encode).collect();
    format!("/{}", segments.join("/"))
}

/// Encode parameters into a canonical query string (no leading `?`).
///
/// Parameters are sorted by key, byte-wise. The sort is stable, so the
/// relative order of duplicate keys (which callers should avoid) is kept.
pub fn encode_query(params: &[Param]) -> String {
    let mut sorted: Vec<&Param> = params.iter().collect();
    sorted.sort_by(|a, b| a.key().cmp(b.key()));

    sorted
        .into_iter()
        .map(|p| format!("{}={}", encode_component(p.key()), encode_value(p)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Form-encode a single query component: space becomes `+`, everything
/// outside the unreserved set becomes `%XX`.
pub fn encode_component(value: &str) -> String {
    value
        .split(' ')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("+")
}

fn encode_value(param: &Param) -> String {
    let raw = param.joined_value();
    if param.is_base64() {
        encode_component(&encode_base64_url(raw))
    } else {
        encode_component(&raw)
    }
}

fn is_pre_encoded(path: &str) -> bool {
    path.to_ascii_lowercase().contains("%2f")
}

fn is_proxy_url(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
