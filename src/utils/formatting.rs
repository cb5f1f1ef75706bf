//! File name derivation for book titles.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything but ASCII word characters, whitespace and hyphens.
static UNSAFE_FILENAME_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_\s-]").unwrap());

/// Folds a title to ASCII: NFKD decomposition with every non-ASCII code point
/// dropped, then `/` and `:` replaced by `-` and `_`.
///
/// ```text
/// "Café: Life/Times" -> "Cafe_ Life-Times"
/// ```
pub fn normalize_title(title: &str) -> String {
	title.nfkd().filter(char::is_ascii).collect::<String>().replace('/', "-").replace(':', "_")
}

/// Sanitizes a book title for use as a file name stem.
///
/// Keeps ASCII letters, digits, `_`, whitespace and `-`; everything else is
/// removed. By default the raw title is filtered, so accented letters vanish
/// (`"Café: Life/Times"` -> `"Caf LifeTimes"`). With `transliterate` the
/// [`normalize_title`] form is filtered instead (`"Cafe_ Life-Times"`).
///
/// Distinct titles may produce the same stem and no length limit is applied.
pub fn sanitize_filename(title: &str, transliterate: bool) -> String {
	let normalized = normalize_title(title);
	let source = if transliterate { normalized.as_str() } else { title };
	UNSAFE_FILENAME_CHARS.replace_all(source, "").into_owned()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn drops_accents_slashes_and_colons() {
		assert_eq!(sanitize_filename("Café: Life/Times", false), "Caf LifeTimes");
	}

	#[test]
	fn keeps_word_characters_whitespace_and_hyphens() {
		assert_eq!(sanitize_filename("Book One", false), "Book One");
		assert_eq!(sanitize_filename("snake_case - 2nd\tEdition", false), "snake_case - 2nd\tEdition");
	}

	#[test]
	fn strips_kindle_author_punctuation() {
		let title = "Thinking, Fast and Slow (Kahneman, Daniel)";
		assert_eq!(sanitize_filename(title, false), "Thinking Fast and Slow Kahneman Daniel");
	}

	#[test]
	fn non_latin_titles_can_sanitize_to_nothing() {
		assert_eq!(sanitize_filename("日本語", false), "");
		assert_eq!(sanitize_filename("日本語", true), "");
	}

	#[test]
	fn distinct_titles_may_collide() {
		assert_eq!(sanitize_filename("A/B", false), sanitize_filename("A:B", false));
	}

	#[test]
	fn normalization_folds_to_ascii() {
		assert_eq!(normalize_title("Café: Life/Times"), "Cafe_ Life-Times");
		assert_eq!(normalize_title("ﬁne Ångström"), "fine Angstrom");
	}

	#[test]
	fn transliterate_filters_the_normalized_title() {
		assert_eq!(sanitize_filename("Café: Life/Times", true), "Cafe_ Life-Times");
		assert_eq!(sanitize_filename("Crème brûlée!", true), "Creme brulee");
	}
}
