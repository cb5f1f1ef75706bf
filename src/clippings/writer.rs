use std::{collections::HashMap, fs::{self, File, OpenOptions}, io::{BufWriter, Write}, path::{Path, PathBuf}};

use anyhow::{Context, Result};

use super::BookGroups;
use crate::utils::sanitize_filename;

/// Line closing every clipping in an output file.
pub const ENTRY_SEPARATOR: &str = "---";

/// Where and how book groups are written.
#[derive(Debug, Clone)]
pub struct WriteOptions {
	pub output_dir:    PathBuf,
	pub extension:     String,
	pub transliterate: bool,
	/// Count what would be written without touching the disk
	pub dry_run:       bool,
}

/// What a write pass did (or would do, for a dry run).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
	pub files_created:     usize,
	pub files_appended:    usize,
	pub clippings_written: usize,
}

/// Path of the file receiving the clippings of `title`.
pub fn output_path(output_dir: &Path, title: &str, extension: &str, transliterate: bool) -> PathBuf {
	output_dir.join(format!("{}.{extension}", sanitize_filename(title, transliterate)))
}

/// Writes every group to its book file, appending when the file exists.
///
/// Each clipping is written as a blank line, the clipping text, and a `---`
/// line. Nothing is rolled back on error: files handled before the failure
/// keep what was written to them.
pub fn write_book_groups(groups: &BookGroups, options: &WriteOptions) -> Result<WriteSummary> {
	if !options.dry_run {
		fs::create_dir_all(&options.output_dir)
			.with_context(|| format!("Failed to create output directory {}", options.output_dir.display()))?;
	}

	let mut summary = WriteSummary::default();
	let mut claimed: HashMap<PathBuf, &str> = HashMap::with_capacity(groups.len());

	for group in groups.iter() {
		let path = output_path(&options.output_dir, &group.title, &options.extension, options.transliterate);

		let seen_this_run = match claimed.insert(path.clone(), group.title.as_str()) {
			Some(other) => {
				if other != group.title {
					tracing::warn!(
						path = %path.display(),
						first = other,
						second = %group.title,
						"titles share a file name, clippings will be appended together"
					);
				}
				true
			}
			None => false,
		};
		if sanitize_filename(&group.title, options.transliterate).is_empty() {
			tracing::warn!(title = %group.title, path = %path.display(), "title has no file-safe characters");
		}

		let exists = path.exists() || (options.dry_run && seen_this_run);
		if exists {
			summary.files_appended += 1;
		} else {
			summary.files_created += 1;
		}
		summary.clippings_written += group.clippings.len();

		if options.dry_run {
			tracing::debug!(path = %path.display(), clippings = group.clippings.len(), "dry run, skipping write");
			continue;
		}

		let file = if exists {
			OpenOptions::new().append(true).open(&path)
		} else {
			File::create(&path)
		}
		.with_context(|| format!("Failed to open {}", path.display()))?;

		write_clippings(file, &group.clippings).with_context(|| format!("Failed to write {}", path.display()))?;
		tracing::debug!(path = %path.display(), clippings = group.clippings.len(), appended = exists, "wrote book file");
	}

	tracing::info!(
		created = summary.files_created,
		appended = summary.files_appended,
		clippings = summary.clippings_written,
		"wrote book files"
	);
	Ok(summary)
}

fn write_clippings(file: File, clippings: &[String]) -> std::io::Result<()> {
	let mut out = BufWriter::new(file);
	for clipping in clippings {
		out.write_all(b"\n")?;
		out.write_all(clipping.as_bytes())?;
		write!(out, "\n{ENTRY_SEPARATOR}\n")?;
	}
	out.flush()
}
