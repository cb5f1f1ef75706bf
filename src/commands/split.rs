use std::path::PathBuf;

use anyhow::Result;

use crate::{
	cli::GroupingArgs,
	clippings::{BookGroups, WriteOptions, WriteSummary, group_clippings, read_clippings, write_book_groups},
	config::{Config, GroupingMode},
};

/// Settings for one pipeline run: config values overridden by CLI flags.
#[derive(Debug, Clone)]
pub struct SplitOptions {
	pub input: PathBuf,
	pub mode:  GroupingMode,
	pub write: WriteOptions,
}

impl SplitOptions {
	pub fn resolve(
		config: &Config,
		input: Option<PathBuf>,
		output_dir: Option<PathBuf>,
		grouping: GroupingArgs,
		dry_run: bool,
	) -> Self {
		let mode = if grouping.global { GroupingMode::Global } else { config.grouping.mode };
		Self {
			input: input.unwrap_or_else(|| PathBuf::from(&config.input.path)),
			mode,
			write: WriteOptions {
				output_dir: output_dir.unwrap_or_else(|| PathBuf::from(&config.output.dir)),
				extension: config.output.extension.clone(),
				transliterate: grouping.transliterate || config.grouping.transliterate,
				dry_run,
			},
		}
	}

	/// Reads and groups the input.
	pub fn load_groups(&self) -> Result<BookGroups> {
		let clippings = read_clippings(&self.input)?;
		Ok(group_clippings(clippings, self.mode)?)
	}

	pub fn run(&self) -> Result<WriteSummary> { write_book_groups(&self.load_groups()?, &self.write) }
}

/// Handles the split command - writes one file per book
pub fn handle_split(options: &SplitOptions) -> Result<()> {
	let summary = options.run()?;
	let dir = options.write.output_dir.display();
	let verb = if options.write.dry_run { "Would write" } else { "Wrote" };
	println!(
		"{verb} {} clipping(s) to {dir}: {} new file(s), {} appended",
		summary.clippings_written, summary.files_created, summary.files_appended
	);
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	const SEP: &str = "==========";

	fn export(blocks: &[&str]) -> String { blocks.iter().map(|b| format!("{b}{SEP}\n")).collect() }

	fn options_in(dir: &std::path::Path, grouping: GroupingArgs) -> SplitOptions {
		let input = dir.join("My Clippings.txt");
		SplitOptions::resolve(&Config::default(), Some(input), Some(dir.join("clippings")), grouping, false)
	}

	#[test]
	fn resolve_prefers_flags_over_config() {
		let mut config = Config::default();
		config.output.extension = "txt".to_string();

		let defaults = SplitOptions::resolve(&config, None, None, GroupingArgs::default(), false);
		assert_eq!(defaults.input, PathBuf::from("My Clippings.txt"));
		assert_eq!(defaults.write.output_dir, PathBuf::from("clippings"));
		assert_eq!(defaults.write.extension, "txt");
		assert_eq!(defaults.mode, GroupingMode::Adjacent);
		assert!(!defaults.write.transliterate);

		let flags = GroupingArgs { global: true, transliterate: true };
		let overridden =
			SplitOptions::resolve(&config, Some("in.txt".into()), Some("out".into()), flags, true);
		assert_eq!(overridden.input, PathBuf::from("in.txt"));
		assert_eq!(overridden.write.output_dir, PathBuf::from("out"));
		assert_eq!(overridden.mode, GroupingMode::Global);
		assert!(overridden.write.transliterate);
		assert!(overridden.write.dry_run);
	}

	#[test]
	fn later_run_of_a_book_replaces_the_earlier_one() {
		let dir = tempfile::tempdir().unwrap();
		let options = options_in(dir.path(), GroupingArgs::default());
		let first = "Book One\n- Your Highlight on page 1\n\nfirst\n";
		let second = "Book One\n- Your Highlight on page 2\n\nsecond\n";
		let third = "Book Two\n- Your Highlight on page 9\n\nthird\n";
		let fourth = "Book One\n- Your Highlight on page 3\n\nfourth\n";
		fs::write(&options.input, export(&[first, second, third, fourth])).unwrap();

		let summary = options.run().unwrap();
		assert_eq!(summary, WriteSummary { files_created: 2, files_appended: 0, clippings_written: 2 });

		let out = dir.path().join("clippings");
		let mut files: Vec<String> =
			fs::read_dir(&out).unwrap().map(|e| e.unwrap().file_name().to_string_lossy().into_owned()).collect();
		files.sort();
		assert_eq!(files, ["Book One.md", "Book Two.md"]);

		let book_one = fs::read_to_string(out.join("Book One.md")).unwrap();
		assert_eq!(book_one, format!("\n{fourth}\n---\n"));
		let book_two = fs::read_to_string(out.join("Book Two.md")).unwrap();
		assert_eq!(book_two, format!("\n{third}\n---\n"));
	}

	#[test]
	fn global_grouping_keeps_every_clipping() {
		let dir = tempfile::tempdir().unwrap();
		let options = options_in(dir.path(), GroupingArgs { global: true, transliterate: false });
		fs::write(&options.input, export(&["A\n1\n", "B\n2\n", "A\n3\n"])).unwrap();

		options.run().unwrap();
		let a = fs::read_to_string(dir.path().join("clippings/A.md")).unwrap();
		assert_eq!(a, "\nA\n1\n\n---\n\nA\n3\n\n---\n");
	}

	#[test]
	fn running_twice_appends() {
		let dir = tempfile::tempdir().unwrap();
		let options = options_in(dir.path(), GroupingArgs::default());
		fs::write(&options.input, export(&["A\n1\n"])).unwrap();

		options.run().unwrap();
		let summary = options.run().unwrap();
		assert_eq!(summary.files_appended, 1);

		let a = fs::read_to_string(dir.path().join("clippings/A.md")).unwrap();
		assert_eq!(a.matches("A\n1\n").count(), 2);
	}

	#[test]
	fn missing_input_fails_before_writing() {
		let dir = tempfile::tempdir().unwrap();
		let options = options_in(dir.path(), GroupingArgs::default());

		assert!(options.run().is_err());
		assert!(!dir.path().join("clippings").exists());
	}
}
