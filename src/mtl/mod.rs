//! MTL line handling for mtlfix.
//!
//! This module handles:
//! - Classifying physical lines by directive (`newmtl`, `Ke`, `Kd`)
//! - The single-pass emissive-to-diffuse rewrite

pub mod directive;
pub mod rewrite;

pub use directive::{Channels, Directive, classify};
pub use rewrite::{BLACK_THRESHOLD, GRAY_REPLACEMENT, RewriteOutcome, rewrite};
