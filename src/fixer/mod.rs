//! File-level orchestration for mtlfix.
//!
//! This module handles:
//! - Idempotent backup creation (`<path>.backup`)
//! - Reading, rewriting, and overwriting the target file
//! - The human-readable end-of-run report

use crate::error::{MtlFixError, Result};
use crate::mtl::rewrite;
use std::path::{Path, PathBuf};

/// Width of the `=` border around the summary block.
const SUMMARY_BORDER_WIDTH: usize = 60;

/// Compute the backup path for a target file: `<path>.backup`.
pub fn backup_path(path: &Path) -> PathBuf {
	let mut raw = path.as_os_str().to_os_string();
	raw.push(".backup");
	PathBuf::from(raw)
}

/// Create `<path>.backup` as a full metadata-preserving copy, only if one
/// does not already exist. Re-running the tool on an already-fixed file
/// never clobbers the first backup.
pub fn create_backup(path: &Path) -> Result<()> {
	let backup = backup_path(path);
	if backup.exists() {
		return Ok(());
	}

	std::fs::copy(path, &backup).map_err(|source| MtlFixError::BackupFailed {
		path: backup.clone(),
		source,
	})?;
	println!("Created backup: {}", backup.display());
	Ok(())
}

/// Fix one MTL file in place.
///
/// Returns `Ok(false)` without touching anything when the file does not
/// exist (a soft failure, reported on stdout). Otherwise backs the file
/// up, runs the rewrite pass fully in memory, overwrites the file, and
/// prints the summary. A parse failure mid-pass surfaces before the write
/// happens, so the on-disk file is never left partially transformed.
pub fn fix_mtl_file(path: &Path) -> Result<bool> {
	if !path.exists() {
		println!("Error: {} not found!", path.display());
		return Ok(false);
	}

	create_backup(path)?;

	let content = std::fs::read_to_string(path).map_err(|source| MtlFixError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let outcome = rewrite(&content)?;

	std::fs::write(path, &outcome.output).map_err(|source| MtlFixError::FileWrite {
		path: path.to_path_buf(),
		source,
	})?;

	print_summary(&outcome.fixed_materials);
	Ok(true)
}

/// Print the bordered summary listing every fixed material.
fn print_summary(fixed_materials: &[String]) {
	let border = "=".repeat(SUMMARY_BORDER_WIDTH);
	println!("\n{border}");
	println!("Fixed {} materials:", fixed_materials.len());
	for name in fixed_materials {
		println!("  - {name}");
	}
	println!("{border}\n");
}
