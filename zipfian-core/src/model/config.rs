use super::zipf_fit::{DEFAULT_HIGH_FRAC, DEFAULT_LOW_FRAC};
use crate::error::{Error, Result};

/// Number of most frequent words shown in a report by default.
pub const DEFAULT_TOP_WORDS: usize = 5;

/// Checks `0 <= low < high <= 1`, rejecting NaN.
pub(crate) fn validate_window(low: f64, high: f64) -> Result<()> {
	if (0.0..=1.0).contains(&low) && (0.0..=1.0).contains(&high) && low < high {
		Ok(())
	} else {
		Err(Error::InvalidWindow { low, high })
	}
}

/// Parameters of one analysis run.
///
/// # Invariants
/// - `0 <= low_frac < high_frac <= 1`
pub struct AnalysisConfig {
	/// Number of most frequent words to report.
	pub top_words: usize,

	/// Start of the fitted rank window, as a fraction of the vocabulary.
	low_frac: f64,

	/// End (exclusive) of the fitted rank window.
	high_frac: f64,
}

impl Default for AnalysisConfig {
	fn default() -> Self {
		Self {
			top_words: DEFAULT_TOP_WORDS,
			low_frac: DEFAULT_LOW_FRAC,
			high_frac: DEFAULT_HIGH_FRAC,
		}
	}
}

impl AnalysisConfig {
	/// Returns the fitted window as `(low_frac, high_frac)`.
	pub fn fit_window(&self) -> (f64, f64) {
		(self.low_frac, self.high_frac)
	}

	/// Sets the fitted window.
	///
	/// # Errors
	/// Returns `Error::InvalidWindow` unless `0 <= low < high <= 1`;
	/// the previous window is kept in that case.
	pub fn set_fit_window(&mut self, low: f64, high: f64) -> Result<()> {
		validate_window(low, high)?;
		self.low_frac = low;
		self.high_frac = high;
		Ok(())
	}
}
