use serde::{Deserialize, Serialize};

use super::defaults::{default_extension, default_output_dir};

/// Where and how per-book files are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
	/// Directory receiving one file per book (created if missing)
	#[serde(default = "default_output_dir")]
	pub dir: String,

	/// File extension appended to the sanitized title, without the dot
	#[serde(default = "default_extension")]
	pub extension: String,
}

impl Default for OutputConfig {
	fn default() -> Self { Self { dir: default_output_dir(), extension: default_extension() } }
}
