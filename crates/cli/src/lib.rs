//! CLI utilities for ixurl tools
//!
//! Provides status messages and count formatting. Messages go to stderr so
//! stdout carries only generated URLs and srcsets.

#![warn(missing_docs)]

pub mod output;
