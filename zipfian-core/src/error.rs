use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every way an analysis run can fail.
///
/// All variants are terminal for a run: nothing is retried and no partial
/// result is returned.
#[derive(Error, Debug)]
pub enum Error {
	/// The input file is missing, unreadable or not valid UTF-8.
	#[error("unable to open file {}: {source}", path.display())]
	FileAccess {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The text contains no word at all, so frequencies are undefined.
	#[error("input contains no words, word frequencies are undefined")]
	EmptyInput,

	/// The configured rank window leaves too few points to fit a line.
	#[error(
		"not enough data to fit a line: {unique_words} unique words leave {points} point(s) in rank window [{start}, {end})"
	)]
	InsufficientData {
		unique_words: usize,
		points: usize,
		start: usize,
		end: usize,
	},

	/// Fit fractions outside `0 <= low < high <= 1`.
	#[error("invalid fit window: expected 0 <= low < high <= 1, got low = {low}, high = {high}")]
	InvalidWindow { low: f64, high: f64 },
}
