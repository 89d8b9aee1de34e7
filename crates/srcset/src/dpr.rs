//! Device-pixel-ratio quality table.

/// Quality used for each device pixel ratio in fixed-dimension srcsets.
///
/// Denser screens get lower quality to keep payloads bounded.
pub const DPR_QUALITIES: [(u8, u8); 5] = [(1, 75), (2, 50), (3, 35), (4, 23), (5, 20)];

/// Look up the quality for a device pixel ratio.
pub fn quality_for_dpr(dpr: u8) -> Option<u8> {
    DPR_QUALITIES
        .iter()
        .find(|(d, _)| *d == dpr)
        .map(|(_, quality)| *quality)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_values() {
        assert_eq!(quality_for_dpr(1), Some(75));
        assert_eq!(quality_for_dpr(2), Some(50));
        assert_eq!(quality_for_dpr(3), Some(35));
        assert_eq!(quality_for_dpr(4), Some(23));
        assert_eq!(quality_for_dpr(5), Some(20));
    }

    #[test]
    fn test_outside_table() {
        assert_eq!(quality_for_dpr(0), None);
        assert_eq!(quality_for_dpr(6), None);
    }

    #[test]
    fn test_quality_decreases_with_density() {
        assert!(DPR_QUALITIES.windows(2).all(|w| w[0].1 > w[1].1));
    }
}
