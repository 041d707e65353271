use std::path::PathBuf;

/// Library-level structured errors for mtlfix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum MtlFixError {
	#[error("Failed to read MTL file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write MTL file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to create backup: {path}")]
	BackupFailed {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Invalid color channel value {token:?} on line {line}")]
	InvalidChannel {
		token: String,
		line: usize,
		#[source]
		source: std::num::ParseFloatError,
	},
}

/// Result type alias using MtlFixError.
pub type Result<T> = std::result::Result<T, MtlFixError>;
