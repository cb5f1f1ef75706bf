mod cli;
mod clippings;
mod commands;
mod config;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_command, handle_config};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
		.with_writer(std::io::stderr)
		.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match cli.command.unwrap_or_else(Commands::default_split) {
		// a broken config file must not prevent regenerating it
		Commands::Config { show: false } => handle_config(false),
		cmd => {
			let config = Config::load().context("Failed to load configuration")?;
			handle_command(&config, cmd)
		}
	}
}
