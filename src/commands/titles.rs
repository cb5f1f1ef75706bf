use anyhow::Result;

use super::SplitOptions;
use crate::clippings::output_path;

/// Handles the titles command - lists book groups without writing
pub fn handle_titles(options: &SplitOptions) -> Result<()> {
	let groups = options.load_groups()?;
	if groups.is_empty() {
		println!("No clippings found in {}.", options.input.display());
		return Ok(());
	}

	let write = &options.write;
	for group in groups.iter() {
		let path = output_path(&write.output_dir, &group.title, &write.extension, write.transliterate);
		let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
		println!("{:>4}  {}  ->  {file_name}", group.clippings.len(), group.title);
	}
	println!("\n{} book(s), {} clipping(s)", groups.len(), groups.clipping_count());
	Ok(())
}
