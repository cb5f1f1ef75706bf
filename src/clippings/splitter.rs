use std::{fs::File, io::{self, BufRead, BufReader}, path::Path};

use anyhow::{Context, Result};

/// Line separating two clippings in the export.
pub const CLIPPING_SEPARATOR: &str = "==========";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads the export at `path` and splits it into clippings.
pub fn read_clippings(path: &Path) -> Result<Vec<String>> {
	let file = File::open(path).with_context(|| format!("Failed to open clippings file {}", path.display()))?;
	let clippings = split_clippings(BufReader::new(file))
		.with_context(|| format!("Failed to read clippings file {}", path.display()))?;
	tracing::info!(path = %path.display(), count = clippings.len(), "read clippings");
	Ok(clippings)
}

/// Splits a text stream into clippings on separator lines.
///
/// Separator lines are dropped, every other line is kept verbatim (line ending
/// included). Empty blocks, e.g. from two separators in a row, are skipped and
/// a trailing block without a closing separator is still returned.
pub fn split_clippings<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
	let mut clippings = Vec::new();
	let mut current = String::new();
	let mut line = String::new();
	let mut first_line = true;

	loop {
		line.clear();
		if reader.read_line(&mut line)? == 0 {
			break;
		}

		let text = if first_line { line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&line) } else { &line };
		first_line = false;

		if text.trim() == CLIPPING_SEPARATOR {
			if !current.is_empty() {
				clippings.push(std::mem::take(&mut current));
			}
		} else {
			current.push_str(text);
		}
	}

	if !current.is_empty() {
		clippings.push(current);
	}

	tracing::debug!(count = clippings.len(), "split clippings");
	Ok(clippings)
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn split(input: &str) -> Vec<String> { split_clippings(Cursor::new(input)).unwrap() }

	#[test]
	fn splits_on_separator_lines() {
		let input = "Book A\n- Highlight 1\n\nfirst\n==========\nBook B\n- Highlight 2\n\nsecond\n==========\n";
		assert_eq!(split(input), vec![
			"Book A\n- Highlight 1\n\nfirst\n".to_string(),
			"Book B\n- Highlight 2\n\nsecond\n".to_string(),
		]);
	}

	#[test]
	fn keeps_a_trailing_block_without_separator() {
		assert_eq!(split("A\none\n==========\nB\ntwo"), vec!["A\none\n", "B\ntwo"]);
	}

	#[test]
	fn drops_empty_blocks() {
		let input = "==========\n==========\nA\n==========\n==========\n\n==========\n";
		// the lone blank line between the last separators is a block of its own
		assert_eq!(split(input), vec!["A\n", "\n"]);
		assert!(split("==========\n==========\n").is_empty());
		assert!(split("").is_empty());
	}

	#[test]
	fn separator_matches_after_trimming() {
		let input = "A\n  ==========  \r\nB\n";
		assert_eq!(split(input), vec!["A\n", "B\n"]);
	}

	#[test]
	fn separator_must_be_the_whole_line() {
		let input = "A\n========== not a separator\n===========\nB\n";
		assert_eq!(split(input).len(), 1);
	}

	#[test]
	fn preserves_crlf_and_internal_whitespace() {
		let input = "Title\r\n\t indented  line \r\n==========\r\n";
		assert_eq!(split(input), vec!["Title\r\n\t indented  line \r\n"]);
	}

	#[test]
	fn strips_leading_byte_order_mark() {
		let input = "\u{feff}Book A\nbody\n==========\n\u{feff}Book B\n";
		let clippings = split(input);
		assert_eq!(clippings[0], "Book A\nbody\n");
		// only the start of the stream is an encoding marker
		assert_eq!(clippings[1], "\u{feff}Book B\n");
	}

	#[test]
	fn rejoining_blocks_reproduces_the_input() {
		let input = "A\n1\n==========\nB\n2\n==========\nC\n3\n";
		let rejoined = split(input).join(&format!("{CLIPPING_SEPARATOR}\n"));
		assert_eq!(rejoined, input);
	}

	#[test]
	fn invalid_utf8_is_an_error() {
		let bytes: &[u8] = &[b'A', b'\n', 0xff, 0xfe, b'\n'];
		assert!(split_clippings(Cursor::new(bytes)).is_err());
	}

	#[test]
	fn missing_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_clippings(&dir.path().join("My Clippings.txt")).unwrap_err();
		assert!(err.to_string().contains("My Clippings.txt"));
	}
}
