/// Replaces every non-alphanumeric character with a space and lowercases the rest.
///
/// Lowercasing uses the full Unicode mapping, so a single character may
/// expand to several (`'İ'` becomes `"i\u{307}"`).
fn strip_punctuation(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		if c.is_alphanumeric() {
			out.extend(c.to_lowercase());
		} else {
			out.push(' ');
		}
	}
	out
}

/// Returns the cleaned form of `text`: lowercase words separated by single spaces.
///
/// Leading and trailing separators are dropped.
///
/// ```
/// use zipfian_core::model::tokenizer::normalize;
///
/// assert_eq!(normalize("  Hello,\n\tWorld! "), "hello world");
/// ```
pub fn normalize(text: &str) -> String {
	tokenize(text).join(" ")
}

/// Splits `text` into lowercase alphanumeric tokens, in order of appearance.
///
/// Digits are ordinary token characters. Empty or whitespace-only input
/// yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
	strip_punctuation(text)
		.split_whitespace()
		.map(str::to_owned)
		.collect()
}
