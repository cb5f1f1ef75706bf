use anyhow::Result;

use crate::{config::Config, utils::confirm};

/// Handles the config command - generates or shows configuration
pub fn handle_config(show: bool) -> Result<()> {
	let config_path = Config::get_config_path()?;

	if show {
		let config = Config::load()?;
		println!("Current configuration:\n");
		println!("{}", toml::to_string_pretty(&config)?);
		let state = if config_path.exists() { "" } else { " (not created yet, showing defaults)" };
		println!("Config file location: {}{state}", config_path.display());
		return Ok(());
	}

	if config_path.exists() {
		println!("Config file already exists at: {}", config_path.display());
		if !confirm("Overwrite existing config?") {
			println!("Cancelled.");
			return Ok(());
		}
	}

	Config::default().save()?;
	println!("Generated default configuration file at: {}", config_path.display());
	Ok(())
}
