mod config;
mod split;
mod titles;

use anyhow::Result;
pub use config::handle_config;
pub use split::{SplitOptions, handle_split};
pub use titles::handle_titles;

use crate::{cli::Commands, config::Config};

/// Dispatches CLI commands to their respective handlers
pub fn handle_command(config: &Config, cmd: Commands) -> Result<()> {
	match cmd {
		Commands::Split { input, output_dir, grouping, dry_run } => {
			handle_split(&SplitOptions::resolve(config, input, output_dir, grouping, dry_run))
		}
		Commands::Titles { input, grouping } => {
			handle_titles(&SplitOptions::resolve(config, input, None, grouping, true))
		}
		Commands::Config { show } => handle_config(show),
	}
}
