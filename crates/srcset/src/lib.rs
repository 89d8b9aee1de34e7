//! Responsive-image srcset generation.
//!
//! This crate provides:
//! - Fluid-width target width sequences
//! - The device-pixel-ratio quality table
//! - Fixed-dimension and fluid-width srcset strings built on
//!   [`ixurl_core::UrlBuilder`]

#![warn(missing_docs)]

mod dpr;
mod error;
mod generator;
mod options;
pub mod target_widths;

pub use dpr::{quality_for_dpr, DPR_QUALITIES};
pub use error::{Result, SrcsetError};
pub use generator::{SrcsetExt, SrcsetMode};
pub use options::SrcsetOptions;
pub use target_widths::{target_widths, TargetWidthRange, MIN_TOLERANCE};
