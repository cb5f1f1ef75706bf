mod defaults;
mod grouping;
mod input;
mod output;

use std::{env, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
pub use grouping::{GroupingConfig, GroupingMode};
pub use input::InputConfig;
pub use output::OutputConfig;
use serde::{Deserialize, Serialize};

/// Configuration for clipsplit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
	#[serde(default)]
	pub input:    InputConfig,
	#[serde(default)]
	pub output:   OutputConfig,
	#[serde(default)]
	pub grouping: GroupingConfig,
}

impl Config {
	/// Loads configuration from the default config file path.
	/// Falls back to defaults when no config file exists yet.
	pub fn load() -> Result<Self> { Self::load_from(&Self::get_config_path()?) }

	/// Loads configuration from an explicit path, defaulting when it is absent.
	pub fn load_from(config_path: &Path) -> Result<Self> {
		if !config_path.exists() {
			tracing::debug!(path = %config_path.display(), "no config file, using defaults");
			return Ok(Self::default());
		}

		let config_str = fs::read_to_string(config_path)
			.with_context(|| format!("Failed to read config file {}", config_path.display()))?;

		let config: Self = toml::from_str(&config_str)
			.with_context(|| format!("Failed to parse config file {}", config_path.display()))?;
		config.validate()?;
		Ok(config)
	}

	/// Saves the configuration to the default config file path with inline
	/// comments.
	pub fn save(&self) -> Result<()> { self.save_to(&Self::get_config_path()?) }

	pub fn save_to(&self, config_path: &Path) -> Result<()> {
		if let Some(parent) = config_path.parent() {
			fs::create_dir_all(parent).context("Failed to create config directory")?;
		}

		fs::write(config_path, self.to_toml_with_comments()).context("Failed to write config file")?;

		Ok(())
	}

	/// Generates TOML string with helpful inline comments for each field
	fn to_toml_with_comments(&self) -> String {
		format!(
			r#"# clipsplit configuration file
# Command-line flags take precedence over these values

[input]
# Highlights export to read when no INPUT argument is given
path = {path}

[output]
# Directory receiving one file per book (created if missing)
dir = {dir}
# Extension of the per-book files, without the dot
extension = {extension}

[grouping]
# "adjacent": only contiguous clippings of a book combine, and a later run of
#             the same book replaces the earlier one
# "global":   every clipping of a book is collected wherever it appears
mode = "{mode}"
# Turn accented letters into their base letter in file names instead of
# dropping them
transliterate = {transliterate}
"#,
			path = toml_string(&self.input.path),
			dir = toml_string(&self.output.dir),
			extension = toml_string(&self.output.extension),
			mode = self.grouping.mode.as_str(),
			transliterate = self.grouping.transliterate,
		)
	}

	/// Returns the platform-specific configuration file path following XDG spec.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/clipsplit/config.toml
	/// 2. ~/.config/clipsplit/config.toml (Unix)
	/// 3. ~/Library/Application Support/clipsplit/config.toml (macOS fallback)
	/// 4. %APPDATA%\clipsplit\config.toml (Windows)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
			PathBuf::from(xdg_config)
		} else if cfg!(target_os = "macos") {
			let home = dirs::home_dir().context("Failed to get home directory")?;
			let xdg_path = home.join(".config");
			if xdg_path.exists() {
				xdg_path
			} else {
				dirs::config_dir().unwrap_or_else(|| home.join("Library/Application Support"))
			}
		} else {
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join("clipsplit").join("config.toml"))
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<()> {
		if self.input.path.trim().is_empty() {
			anyhow::bail!("input.path must not be empty");
		}

		if self.output.dir.trim().is_empty() {
			anyhow::bail!("output.dir must not be empty");
		}

		let ext = &self.output.extension;
		if ext.is_empty() {
			anyhow::bail!("output.extension must not be empty");
		}
		if ext.starts_with('.') {
			anyhow::bail!("output.extension must be given without the leading dot");
		}
		if ext.contains(['/', '\\']) {
			anyhow::bail!("output.extension must not contain a path separator");
		}

		Ok(())
	}
}

/// Quotes a value as a TOML basic string.
fn toml_string(value: &str) -> String { toml::Value::String(value.to_string()).to_string() }
