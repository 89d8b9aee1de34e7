//! Srcset generation on top of [`UrlBuilder`].

use ixurl_core::params::{contains_key, with_overrides};
use ixurl_core::{Param, UrlBuilder};
use tracing::debug;

use crate::dpr::DPR_QUALITIES;
use crate::options::SrcsetOptions;
use crate::Result;

const CANDIDATE_SEPARATOR: &str = ",\n";

/// How a srcset varies its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrcsetMode {
    /// Width or height is pinned; candidates vary by device pixel ratio (`1x`..`5x`)
    FixedDimension,
    /// Candidates vary by width (`100w`, `116w`, ...)
    FluidWidth,
}

impl SrcsetMode {
    /// Pick the mode for a parameter set: an explicit `w` or `h` pins the
    /// dimensions.
    pub fn detect(params: &[Param]) -> Self {
        if contains_key(params, "w") || contains_key(params, "h") {
            SrcsetMode::FixedDimension
        } else {
            SrcsetMode::FluidWidth
        }
    }
}

/// Srcset generation for a [`UrlBuilder`].
pub trait SrcsetExt {
    /// Build a srcset for `path`.
    ///
    /// Fixed-dimension params produce five DPR candidates; otherwise widths
    /// come from the target width generator. Invalid width bounds are only
    /// an error in fluid-width mode, where they are used.
    fn create_srcset(&self, path: &str, params: &[Param], options: &SrcsetOptions) -> Result<String>;

    /// Build a fluid-width srcset from explicit widths, in the given order.
    fn create_srcset_from_widths(&self, path: &str, params: &[Param], widths: &[u32]) -> String;
}

impl SrcsetExt for UrlBuilder {
    fn create_srcset(&self, path: &str, params: &[Param], options: &SrcsetOptions) -> Result<String> {
        match SrcsetMode::detect(params) {
            SrcsetMode::FixedDimension => Ok(dpr_srcset(self, path, params, options.variable_quality)),
            SrcsetMode::FluidWidth => {
                let widths = options.width_range(self.srcset_defaults())?.widths();
                Ok(self.create_srcset_from_widths(path, params, &widths))
            }
        }
    }

    fn create_srcset_from_widths(&self, path: &str, params: &[Param], widths: &[u32]) -> String {
        debug!(path, candidates = widths.len(), "Building fluid-width srcset");

        widths
            .iter()
            .map(|width| {
                let url = self.create_url(path, &with_overrides(params, [Param::new("w", width.to_string())]));
                format!("{url} {width}w")
            })
            .collect::<Vec<_>>()
            .join(CANDIDATE_SEPARATOR)
    }
}

fn dpr_srcset(builder: &UrlBuilder, path: &str, params: &[Param], variable_quality: bool) -> String {
    // a caller-pinned quality wins over the table
    let add_quality = variable_quality && !contains_key(params, "q");
    debug!(path, add_quality, "Building fixed-dimension srcset");

    DPR_QUALITIES
        .iter()
        .map(|&(dpr, quality)| {
            let mut extra = vec![Param::new("dpr", dpr.to_string())];
            if add_quality {
                extra.push(Param::new("q", quality.to_string()));
            }
            let url = builder.create_url(path, &with_overrides(params, extra));
            format!("{url} {dpr}x")
        })
        .collect::<Vec<_>>()
        .join(CANDIDATE_SEPARATOR)
}
