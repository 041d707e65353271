#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn mtlfix_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("mtlfix").unwrap()
}

fn backup_of(path: &Path) -> std::path::PathBuf {
	let mut raw = path.as_os_str().to_os_string();
	raw.push(".backup");
	std::path::PathBuf::from(raw)
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	mtlfix_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Fixes MTL files"));
}

#[test]
fn test_version_flag() {
	mtlfix_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("mtlfix"));
}

#[test]
fn test_no_args_prints_usage_with_example() {
	mtlfix_cmd()
		.assert()
		.code(1)
		.stdout(predicate::str::contains("Usage: mtlfix <path_to_file.mtl>"))
		.stdout(predicate::str::contains(
			"mtlfix models/island/ship_in_clouds.mtl",
		));
}

// ============================================================================
// Missing-file tests
// ============================================================================

#[test]
fn test_missing_file_reports_and_exits_successfully() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("nope.mtl");

	// Soft failure: the message is printed but the exit status is success.
	mtlfix_cmd()
		.arg(&path)
		.assert()
		.success()
		.stdout(predicate::str::contains(format!(
			"Error: {} not found!",
			path.display()
		)));

	assert!(!backup_of(&path).exists());
}

// ============================================================================
// Rewrite tests
// ============================================================================

#[test]
fn test_fixes_emissive_and_black_diffuse() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("ship.mtl");
	let original = "newmtl Hull\nKe 0.2 0.0 0.0\nKd 0.0 0.0 0.0\n";
	fs::write(&path, original).unwrap();

	mtlfix_cmd()
		.arg(&path)
		.assert()
		.success()
		.stdout(predicate::str::contains("Created backup:"))
		.stdout(predicate::str::contains("Fixed 1 materials:"))
		.stdout(predicate::str::contains("  - Hull"))
		.stdout(predicate::str::contains("=".repeat(60)))
		.stdout(predicate::str::contains("Done!"));

	assert_eq!(
		fs::read_to_string(&path).unwrap(),
		"newmtl Hull\n\
		 Kd 0.2 0.0 0.0\n\
		 # Original: Ke 0.2 0.0 0.0\n\
		 Kd 0.8 0.8 0.8  # Was black, set to gray\n"
	);
	assert_eq!(fs::read_to_string(backup_of(&path)).unwrap(), original);
}

#[test]
fn test_leaves_healthy_materials_alone() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("ship.mtl");
	let original = "newmtl Deck\nKd 0.6 0.5 0.4\nKe 0.0 0.0 0.0\nmap_Kd deck.png\n";
	fs::write(&path, original).unwrap();

	mtlfix_cmd()
		.arg(&path)
		.assert()
		.success()
		.stdout(predicate::str::contains("Fixed 0 materials:"));

	assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_second_run_is_idempotent() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("ship.mtl");
	let original = "newmtl Hull\nKe 0.2 0.0 0.0\nKd 0.0 0.0 0.0\n";
	fs::write(&path, original).unwrap();

	mtlfix_cmd().arg(&path).assert().success();
	let after_first = fs::read_to_string(&path).unwrap();

	// No backup notice the second time, nothing left to fix.
	mtlfix_cmd()
		.arg(&path)
		.assert()
		.success()
		.stdout(predicate::str::contains("Created backup:").not())
		.stdout(predicate::str::contains("Fixed 0 materials:"));

	assert_eq!(fs::read_to_string(&path).unwrap(), after_first);
	assert_eq!(fs::read_to_string(backup_of(&path)).unwrap(), original);
}

#[test]
fn test_reports_each_material_once() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("ship.mtl");
	fs::write(
		&path,
		"newmtl Hull\nKe 0.2 0.0 0.0\nKd 0.0 0.0 0.0\nnewmtl Mast\nKd 0.0 0.0 0.0\n",
	)
	.unwrap();

	let assert = mtlfix_cmd().arg(&path).assert().success();
	let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

	assert!(stdout.contains("Fixed 2 materials:"));
	assert_eq!(stdout.matches("  - Hull").count(), 1);
	assert!(stdout.contains("  - Mast"));
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn test_malformed_channel_fails_and_preserves_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let path = temp_dir.path().join("bad.mtl");
	let original = "newmtl Hull\nKe red 0.0 0.0\n";
	fs::write(&path, original).unwrap();

	mtlfix_cmd()
		.arg(&path)
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid color channel value"));

	// The write only happens after a clean full pass.
	assert_eq!(fs::read_to_string(&path).unwrap(), original);
}
