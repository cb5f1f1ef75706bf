use serde::{Deserialize, Serialize};

use super::defaults::default_false;

/// How clippings sharing a title are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingMode {
	/// Only contiguous runs combine; a later run of the same title replaces
	/// the earlier one.
	#[default]
	Adjacent,
	/// Every clipping of a title is collected, wherever it appears.
	Global,
}

impl GroupingMode {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Adjacent => "adjacent",
			Self::Global => "global",
		}
	}
}

/// Grouping and file naming configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingConfig {
	#[serde(default)]
	pub mode: GroupingMode,

	/// Build file names from the NFKD-normalized title (accents become their
	/// base letter) instead of dropping non-ASCII characters outright
	#[serde(default = "default_false")]
	pub transliterate: bool,
}
