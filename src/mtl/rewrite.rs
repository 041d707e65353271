use crate::error::Result;
use crate::mtl::directive::{Directive, classify};

/// A channel at or below this value is considered black.
///
/// Emission counts as "on" if any channel exceeds it (one glowing channel
/// is enough); diffuse counts as "black" only if every channel is under it.
pub const BLACK_THRESHOLD: f64 = 0.01;

/// Replacement emitted for a pure-black diffuse line.
pub const GRAY_REPLACEMENT: &str = "Kd 0.8 0.8 0.8  # Was black, set to gray";

/// Result of one rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct RewriteOutcome {
	/// The transformed file content.
	pub output: String,

	/// Names of materials altered by either rule, in first-occurrence
	/// order, without duplicates.
	pub fixed_materials: Vec<String>,
}

/// Transform MTL content in a single forward pass.
///
/// Two rules, applied per physical line in original order:
///
/// - A `Ke r g b` line with any channel above the black threshold becomes
///   `Kd r g b` (original tokens verbatim) followed by a `# Original:`
///   comment preserving the replaced line.
/// - A `Kd r g b` line with all channels under the threshold becomes a
///   fixed neutral-gray line so the surface stays visible.
///
/// Every other line, including `newmtl`, passes through unchanged. A
/// channel token that does not parse as a float fails the whole pass, so
/// callers never see partially transformed content.
pub fn rewrite(content: &str) -> Result<RewriteOutcome> {
	let mut output = String::with_capacity(content.len());
	let mut fixed_materials: Vec<String> = Vec::new();
	let mut current_material: Option<&str> = None;

	for (index, line) in content.split_inclusive('\n').enumerate() {
		let number = index + 1;

		match classify(line) {
			Directive::NewMtl(name) => {
				current_material = Some(name);
				output.push_str(line);
			}
			Directive::Emissive(channels) => {
				let [r, g, b] = channels.values(number)?;
				if r > BLACK_THRESHOLD || g > BLACK_THRESHOLD || b > BLACK_THRESHOLD {
					output.push_str(&format!(
						"Kd {} {} {}\n",
						channels.red, channels.green, channels.blue
					));
					// Keeps the original line's own terminator (or lack of one).
					output.push_str("# Original: ");
					output.push_str(line);
					record_fixed(&mut fixed_materials, current_material);
				} else {
					// Effectively black emission: nothing to promote.
					output.push_str(line);
				}
			}
			Directive::Diffuse(channels) => {
				let [r, g, b] = channels.values(number)?;
				if r < BLACK_THRESHOLD && g < BLACK_THRESHOLD && b < BLACK_THRESHOLD {
					output.push_str(GRAY_REPLACEMENT);
					output.push('\n');
					record_fixed(&mut fixed_materials, current_material);
				} else {
					output.push_str(line);
				}
			}
			Directive::Other => output.push_str(line),
		}
	}

	Ok(RewriteOutcome {
		output,
		fixed_materials,
	})
}

/// Record a material in first-occurrence order, skipping duplicates and
/// fixes hit before any `newmtl` line.
fn record_fixed(fixed_materials: &mut Vec<String>, current_material: Option<&str>) {
	if let Some(name) = current_material
		&& !fixed_materials.iter().any(|m| m == name)
	{
		fixed_materials.push(name.to_string());
	}
}
