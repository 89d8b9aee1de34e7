//! Transformation parameters.

use std::fmt;

/// A single query parameter: a key with one or more values.
///
/// Multiple values are serialized joined by `,` (for example
/// `auto=format,compress`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    key: String,
    values: Vec<String>,
}

impl Param {
    /// Create a parameter with a single value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            values: vec![value.into()],
        }
    }

    /// Create a parameter with several values, kept in the given order.
    ///
    /// `values` must not be empty; a parameter always carries at least one
    /// value.
    pub fn with_values<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        debug_assert!(!values.is_empty(), "parameter needs at least one value");
        Self {
            key: key.into(),
            values,
        }
    }

    /// Parameter key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Parameter values in caller order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Values joined by `,`, before any encoding.
    pub fn joined_value(&self) -> String {
        self.values.join(",")
    }

    /// Whether the key follows the base64 convention (`txt64`, `mark64`, ...).
    ///
    /// Values of such parameters are base64url-encoded by the query codec.
    pub fn is_base64(&self) -> bool {
        self.key.ends_with("64")
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.joined_value())
    }
}

/// Check whether `params` contains a parameter named `key`.
pub fn contains_key(params: &[Param], key: &str) -> bool {
    params.iter().any(|p| p.key == key)
}

/// Copy `params`, replacing any same-named parameters with `extra`.
///
/// Used by srcset generation so that `w`, `dpr` and `q` never appear twice.
pub fn with_overrides(params: &[Param], extra: impl IntoIterator<Item = Param>) -> Vec<Param> {
    let extra: Vec<Param> = extra.into_iter().collect();
    let mut merged: Vec<Param> = params
        .iter()
        .filter(|p| !contains_key(&extra, &p.key))
        .cloned()
        .collect();
    merged.extend(extra);
    merged
}
