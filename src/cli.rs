//! Command-line interface for clipsplit.
//!
//! - split: Write one Markdown file per book (also the default if no command
//!   is given)
//! - titles: Preview the book groups without writing anything
//! - config: Generate or show the configuration file

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Main CLI structure parsed by clap.
#[derive(Parser)]
#[command(name = "clipsplit", version)]
#[command(about = "Split an e-reader clippings export into one Markdown file per book", long_about = None)]
pub struct Cli {
	/// More log output on stderr (-v info, -vv debug); RUST_LOG takes precedence
	#[arg(short, long, action = ArgAction::Count, global = true)]
	pub verbose: u8,

	#[command(subcommand)]
	pub command: Option<Commands>,
}

/// Grouping flags shared by `split` and `titles`.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct GroupingArgs {
	/// Collect every clipping of a book, not only the last contiguous run
	#[arg(long)]
	pub global: bool,

	/// Turn accented letters into their base letter in file names
	#[arg(long)]
	pub transliterate: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
	/// Write one file per book into the output directory
	Split {
		/// Clippings export to read (defaults to the configured input path)
		input: Option<PathBuf>,
		/// Directory receiving the book files
		#[arg(short, long)]
		output_dir: Option<PathBuf>,
		#[command(flatten)]
		grouping: GroupingArgs,
		/// Report what would be written without writing
		#[arg(short = 'n', long)]
		dry_run: bool,
	},
	/// List book titles, their file names and clipping counts
	Titles {
		/// Clippings export to read (defaults to the configured input path)
		input: Option<PathBuf>,
		#[command(flatten)]
		grouping: GroupingArgs,
	},
	/// Generate default configuration file
	Config {
		/// Show current configuration instead of generating
		#[arg(short, long)]
		show: bool,
	},
}

impl Commands {
	/// The command run when none is given on the command line.
	pub const fn default_split() -> Self {
		Self::Split {
			input:      None,
			output_dir: None,
			grouping:   GroupingArgs { global: false, transliterate: false },
			dry_run:    false,
		}
	}
}
