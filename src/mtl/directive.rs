use crate::error::{MtlFixError, Result};

/// The three color channel tokens of a `Ke`/`Kd` line, borrowed from the
/// source text so replacements can re-emit them verbatim (no reformatting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels<'a> {
	pub red: &'a str,
	pub green: &'a str,
	pub blue: &'a str,
}

impl<'a> Channels<'a> {
	/// Extract channel tokens from a trimmed directive line.
	///
	/// Returns `None` when the line has fewer than four whitespace-separated
	/// tokens (directive keyword plus three channels). Tokens beyond the
	/// third channel are ignored.
	pub fn split(stripped: &'a str) -> Option<Self> {
		let parts: Vec<&str> = stripped.split_whitespace().collect();
		if parts.len() >= 4 {
			Some(Channels {
				red: parts[1],
				green: parts[2],
				blue: parts[3],
			})
		} else {
			None
		}
	}

	/// Parse the channel tokens as floats.
	///
	/// `line` is the 1-based line number, used for error reporting. A token
	/// that does not parse as a decimal number aborts the whole run.
	pub fn values(&self, line: usize) -> Result<[f64; 3]> {
		Ok([
			parse_channel(self.red, line)?,
			parse_channel(self.green, line)?,
			parse_channel(self.blue, line)?,
		])
	}
}

fn parse_channel(token: &str, line: usize) -> Result<f64> {
	token.parse().map_err(|source| MtlFixError::InvalidChannel {
		token: token.to_string(),
		line,
		source,
	})
}

/// A classified MTL line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
	/// `newmtl <name>` - starts a new material block.
	NewMtl(&'a str),

	/// `Ke r g b [...]` - emissive color with at least three channels.
	Emissive(Channels<'a>),

	/// `Kd r g b [...]` - diffuse color with at least three channels.
	Diffuse(Channels<'a>),

	/// Anything else (comments, texture maps, blank lines, short
	/// `Ke`/`Kd` lines) - passed through untouched.
	Other,
}

/// Classify one physical line by its trimmed prefix.
pub fn classify(line: &str) -> Directive<'_> {
	let stripped = line.trim();

	if let Some(name) = stripped.strip_prefix("newmtl ") {
		return Directive::NewMtl(name);
	}

	if stripped.starts_with("Ke ") {
		if let Some(channels) = Channels::split(stripped) {
			return Directive::Emissive(channels);
		}
	} else if stripped.starts_with("Kd ") {
		if let Some(channels) = Channels::split(stripped) {
			return Directive::Diffuse(channels);
		}
	}

	Directive::Other
}
