//! Fluid-width target widths.
//!
//! Widths grow geometrically from the minimum, each step at most
//! `2 * tolerance` larger than the previous one. The running width is carried
//! at full precision; only the emitted value is rounded. Rounding the carried
//! value instead drifts away from the reference sequence after a few steps.

use ixurl_core::config::{DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH, DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::{Result, SrcsetError};

/// Smallest accepted tolerance.
///
/// Below this the growth ratio approaches 1 and the sequence length explodes;
/// at `2 * tolerance` under f64 precision it never terminates.
pub const MIN_TOLERANCE: f64 = 0.01;

/// Validated bounds for a fluid-width width sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetWidthRange {
    min_width: u32,
    max_width: u32,
    tolerance: f64,
}

impl TargetWidthRange {
    /// Validate and create a range.
    ///
    /// Bounds must be positive with `min_width <= max_width`, and the
    /// tolerance must lie in `[MIN_TOLERANCE, 1)`.
    pub fn new(min_width: u32, max_width: u32, tolerance: f64) -> Result<Self> {
        if min_width == 0 || max_width == 0 {
            return Err(SrcsetError::InvalidArgument(format!(
                "width bounds must be positive (min {min_width}, max {max_width})"
            )));
        }
        if min_width > max_width {
            return Err(SrcsetError::InvalidArgument(format!(
                "min width {min_width} exceeds max width {max_width}"
            )));
        }
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(SrcsetError::InvalidArgument(format!(
                "tolerance must be between 0 and 1 exclusive, got {tolerance}"
            )));
        }
        if tolerance < MIN_TOLERANCE {
            return Err(SrcsetError::InvalidArgument(format!(
                "tolerance must be at least {MIN_TOLERANCE}, got {tolerance}"
            )));
        }

        Ok(Self {
            min_width,
            max_width,
            tolerance,
        })
    }

    /// Smallest width
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Largest width
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Growth tolerance
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compute the ordered width sequence.
    ///
    /// The maximum is always the last element. When the minimum equals the
    /// maximum the sequence is just `[max_width]`.
    pub fn widths(&self) -> Vec<u32> {
        let ratio = 1.0 + 2.0 * self.tolerance;
        let max = f64::from(self.max_width);
        let mut previous = f64::from(self.min_width);
        let mut widths = Vec::new();

        while previous < max {
            widths.push(previous.round() as u32);
            previous *= ratio;
        }
        widths.push(self.max_width);

        widths
    }
}

impl Default for TargetWidthRange {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Compute target widths between `min_width` and `max_width`.
///
/// # Example
/// ```
/// use ixurl_srcset::target_widths;
///
/// let widths = target_widths(300, 3000, 0.13).unwrap();
/// assert_eq!(widths, [300, 378, 476, 600, 756, 953, 1200, 1513, 1906, 2401, 3000]);
/// ```
pub fn target_widths(min_width: u32, max_width: u32, tolerance: f64) -> Result<Vec<u32>> {
    Ok(TargetWidthRange::new(min_width, max_width, tolerance)?.widths())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn widths_end_at_max_and_never_shrink(
            min in 1u32..2000,
            span in 0u32..6000,
            tolerance in 0.01f64..0.99,
        ) {
            let widths = target_widths(min, min + span, tolerance).unwrap();
            prop_assert_eq!(widths.first().copied(), Some(min));
            prop_assert_eq!(widths.last().copied(), Some(min + span));
            prop_assert!(widths.windows(2).all(|w| w[0] <= w[1]));
        }

        #[test]
        fn widths_are_recomputed_identically(min in 1u32..2000, tolerance in 0.01f64..0.99) {
            let range = TargetWidthRange::new(min, 8192, tolerance).unwrap();
            prop_assert_eq!(range.widths(), range.widths());
        }
    }
}
