use serde::{Deserialize, Serialize};

use super::defaults::default_input_path;

/// Where the highlights export is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
	/// Path of the clippings export, relative to the working directory
	#[serde(default = "default_input_path")]
	pub path: String,
}

impl Default for InputConfig {
	fn default() -> Self { Self { path: default_input_path() } }
}
