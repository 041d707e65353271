use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use mtlfix_cli::fixer::fix_mtl_file;

#[derive(Parser)]
#[command(name = "mtlfix")]
#[command(
	author,
	version,
	about = "Fixes MTL files whose emissive-only materials render black by promoting Ke into Kd"
)]
struct Cli {
	/// Path to the .mtl file to fix
	// Optional so a missing argument goes through our usage message on
	// stdout with exit code 1 instead of clap's stderr error.
	mtl_file: Option<PathBuf>,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let Some(path) = cli.mtl_file else {
		println!("Usage: mtlfix <path_to_file.mtl>");
		println!("\nExample:");
		println!("  mtlfix models/island/ship_in_clouds.mtl");
		return Ok(ExitCode::from(1));
	};

	// A missing target file is a soft failure: fix_mtl_file has already
	// printed the message and the process still exits successfully.
	fix_mtl_file(&path).with_context(|| format!("Failed to fix {}", path.display()))?;

	println!("Done! Your MTL file should now work in OpenGL.");
	Ok(ExitCode::SUCCESS)
}
