//! Per-call srcset options.

use ixurl_core::SrcsetDefaults;
use serde::{Deserialize, Serialize};

use crate::target_widths::TargetWidthRange;
use crate::Result;

/// Options for [`crate::SrcsetExt::create_srcset`].
///
/// Width bounds left as `None` fall back to the builder's
/// [`SrcsetDefaults`] (100, 8192 and 0.08 unless configured otherwise).
/// They only apply in fluid-width mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SrcsetOptions {
    /// Smallest generated width
    pub min_width: Option<u32>,
    /// Largest generated width
    pub max_width: Option<u32>,
    /// Allowed width difference between neighbouring candidates, in [0.01, 1)
    pub tolerance: Option<f64>,
    /// Add the DPR quality table's `q` in fixed-dimension mode
    pub variable_quality: bool,
}

impl Default for SrcsetOptions {
    fn default() -> Self {
        Self {
            min_width: None,
            max_width: None,
            tolerance: None,
            variable_quality: true,
        }
    }
}

impl SrcsetOptions {
    /// Set the minimum width
    #[must_use]
    pub fn with_min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set the maximum width
    #[must_use]
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set the tolerance
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Enable or disable variable quality
    #[must_use]
    pub fn with_variable_quality(mut self, enabled: bool) -> Self {
        self.variable_quality = enabled;
        self
    }

    /// Resolve the width range against builder defaults and validate it.
    pub fn width_range(&self, defaults: SrcsetDefaults) -> Result<TargetWidthRange> {
        TargetWidthRange::new(
            self.min_width.unwrap_or(defaults.min_width),
            self.max_width.unwrap_or(defaults.max_width),
            self.tolerance.unwrap_or(defaults.tolerance),
        )
    }
}
