//! Constant-time operations for security.

use subtle::ConstantTimeEq;

/// Compare two byte slices in constant time.
///
/// The comparison takes the same amount of time regardless of where the
/// slices differ. Slices of different lengths compare unequal immediately.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_digests() {
        let digest = b"c8bd1807209f7f1d96dd7123f92febb4";
        assert!(constant_time_compare(digest, digest));
    }

    #[test]
    fn test_single_nibble_difference() {
        assert!(!constant_time_compare(
            b"c8bd1807209f7f1d96dd7123f92febb4",
            b"c8bd1807209f7f1d96dd7123f92febb5"
        ));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!constant_time_compare(b"c8bd", b"c8bd18"));
    }

    #[test]
    fn test_empty_slices() {
        assert!(constant_time_compare(b"", b""));
    }
}
