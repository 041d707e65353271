//! Mtlfix - CLI tool for fixing MTL material files that render black.
//!
//! Some renderers ignore the emissive color directive (`Ke`) and only honor
//! diffuse color (`Kd`), so emissive-only materials show up black. This
//! library provides the core functionality for mtlfix, including:
//! - Line classification for the relevant MTL directives
//! - A single-pass rewrite promoting non-black `Ke` values into `Kd`
//! - Graying out pure-black `Kd` values so surfaces stay visible
//! - Idempotent backup creation and in-place file rewriting
//!
//! # Example
//!
//! ```
//! use mtlfix_cli::mtl::rewrite;
//!
//! let outcome = rewrite("newmtl Hull\nKe 0.2 0.0 0.0\n").unwrap();
//! assert_eq!(outcome.fixed_materials, vec!["Hull"]);
//! assert!(outcome.output.contains("Kd 0.2 0.0 0.0"));
//! ```

pub mod error;
pub mod fixer;
pub mod mtl;

pub use error::{MtlFixError, Result};
