//! User interaction utilities.

use std::io::{self, BufRead, Write, stdin, stdout};

/// Prompts on stdout and reads the answer from stdin.
pub fn confirm(prompt: &str) -> bool { confirm_with(prompt, &mut stdin().lock(), &mut stdout()).unwrap_or(false) }

/// Writes `prompt` to `output` and returns true when the line read from
/// `input` is a yes. Anything else, including end of input, is a no.
pub fn confirm_with<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
	write!(output, "{prompt} (y/N): ")?;
	output.flush()?;

	let mut answer = String::new();
	input.read_line(&mut answer)?;
	Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
