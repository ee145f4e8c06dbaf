use super::config::validate_window;
use super::frequency::RankedWord;
use crate::error::{Error, Result};

/// Default fraction of the most frequent ranks left out of the fit.
pub const DEFAULT_LOW_FRAC: f64 = 0.1;

/// Default end of the fitted window, as a fraction of the vocabulary.
/// Ranks past it (the sparse tail) are left out of the fit.
pub const DEFAULT_HIGH_FRAC: f64 = 0.6;

/// Line `ln(frequency) = slope * ln(rank) + intercept`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
	pub slope: f64,
	pub intercept: f64,
	/// First fitted index into the ranked list (rank `start + 1`).
	pub start: usize,
	/// One past the last fitted index.
	pub end: usize,
}

impl FitResult {
	/// Evaluates the fitted line at `ln_rank`.
	pub fn predict(&self, ln_rank: f64) -> f64 {
		self.slope * ln_rank + self.intercept
	}
}

/// Returns the half-open index window `[floor(low * n), floor(high * n))`.
fn window(n: usize, low_frac: f64, high_frac: f64) -> (usize, usize) {
	let start = (low_frac * n as f64).floor() as usize;
	let end = (high_frac * n as f64).floor() as usize;
	(start.min(n), end.min(n))
}

/// Ordinary least-squares line through `(x, y)` points.
///
/// Returns `None` when fewer than two points are given or every `x` is the same.
fn least_squares(points: &[(f64, f64)]) -> Option<(f64, f64)> {
	if points.len() < 2 {
		return None;
	}

	let n = points.len() as f64;
	let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
	let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

	let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), (x, y)| {
		let dx = x - mean_x;
		(sxy + dx * (y - mean_y), sxx + dx * dx)
	});
	if sxx == 0.0 {
		return None;
	}

	let slope = sxy / sxx;
	Some((slope, mean_y - slope * mean_x))
}

/// Fits a line to `(ln rank, ln frequency)` over an interior slice of `ranked`.
///
/// Rank `i + 1` is given to `ranked[i]`. Only indices in
/// `[floor(low_frac * N), floor(high_frac * N))` take part, so the head
/// (stopwords) and the sparse tail, which stray furthest from Zipf's line,
/// do not pull the slope.
///
/// # Errors
/// - `Error::InvalidWindow` unless `0 <= low_frac < high_frac <= 1`.
/// - `Error::InsufficientData` if the window holds fewer than two points.
pub fn fit_log_log(ranked: &[RankedWord], low_frac: f64, high_frac: f64) -> Result<FitResult> {
	validate_window(low_frac, high_frac)?;

	let (start, end) = window(ranked.len(), low_frac, high_frac);
	let points: Vec<(f64, f64)> = ranked
		.iter()
		.enumerate()
		.take(end)
		.skip(start)
		.map(|(i, entry)| (((i + 1) as f64).ln(), entry.frequency.ln()))
		.collect();

	let (slope, intercept) = least_squares(&points).ok_or(Error::InsufficientData {
		unique_words: ranked.len(),
		points: points.len(),
		start,
		end,
	})?;

	log::info!(
		"fitted ranks {}..={} of {}: slope {:.4}, intercept {:.4}",
		start + 1,
		end,
		ranked.len(),
		slope,
		intercept
	);
	Ok(FitResult { slope, intercept, start, end })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ranked_from(frequencies: &[f64]) -> Vec<RankedWord> {
		frequencies
			.iter()
			.enumerate()
			.map(|(i, &frequency)| RankedWord { word: format!("w{i}"), count: 1, frequency })
			.collect()
	}

	#[test]
	fn recovers_inverse_rank_law() {
		let frequencies: Vec<f64> = (1..=200).map(|rank| 1.0 / rank as f64).collect();
		let fit = fit_log_log(&ranked_from(&frequencies), DEFAULT_LOW_FRAC, DEFAULT_HIGH_FRAC).unwrap();

		assert!((fit.slope + 1.0).abs() < 1e-9, "slope = {}", fit.slope);
		assert!(fit.intercept.abs() < 1e-9, "intercept = {}", fit.intercept);
		assert_eq!((fit.start, fit.end), (20, 120));
	}

	#[test]
	fn recovers_scaled_power_law() {
		// f = 0.5 * rank^-1.3
		let frequencies: Vec<f64> = (1..=50).map(|rank| 0.5 * (rank as f64).powf(-1.3)).collect();
		let fit = fit_log_log(&ranked_from(&frequencies), 0.0, 1.0).unwrap();

		assert!((fit.slope + 1.3).abs() < 1e-9);
		assert!((fit.intercept - 0.5f64.ln()).abs() < 1e-9);
		assert!((fit.predict(0.0) - 0.5f64.ln()).abs() < 1e-9);
	}

	#[test]
	fn window_excludes_head_and_tail() {
		// Only indices 1..6 lie on the line; head and tail are far off it
		let mut frequencies: Vec<f64> = (1..=10).map(|rank| 1.0 / rank as f64).collect();
		frequencies[0] = 0.9;
		for f in &mut frequencies[6..] {
			*f = 1e-6;
		}
		let fit = fit_log_log(&ranked_from(&frequencies), 0.1, 0.6).unwrap();

		assert_eq!((fit.start, fit.end), (1, 6));
		assert!((fit.slope + 1.0).abs() < 1e-9);
	}

	#[test]
	fn too_few_words_is_an_error() {
		let ranked = ranked_from(&[0.5, 0.3, 0.2]);
		match fit_log_log(&ranked, DEFAULT_LOW_FRAC, DEFAULT_HIGH_FRAC) {
			Err(Error::InsufficientData { unique_words, points, start, end }) => {
				assert_eq!(unique_words, 3);
				assert_eq!(points, 1);
				assert_eq!((start, end), (0, 1));
			}
			other => panic!("expected InsufficientData, got {:?}", other),
		}
	}

	#[test]
	fn empty_distribution_is_an_error() {
		assert!(matches!(
			fit_log_log(&[], DEFAULT_LOW_FRAC, DEFAULT_HIGH_FRAC),
			Err(Error::InsufficientData { points: 0, .. })
		));
	}

	#[test]
	fn rejects_inverted_window() {
		let ranked = ranked_from(&[0.4, 0.3, 0.2, 0.1]);
		assert!(matches!(fit_log_log(&ranked, 0.6, 0.1), Err(Error::InvalidWindow { .. })));
		assert!(matches!(fit_log_log(&ranked, -0.1, 0.5), Err(Error::InvalidWindow { .. })));
		assert!(matches!(fit_log_log(&ranked, 0.1, f64::NAN), Err(Error::InvalidWindow { .. })));
	}

	#[test]
	fn least_squares_rejects_vertical_data() {
		assert_eq!(least_squares(&[(1.0, 2.0), (1.0, 3.0)]), None);
		assert_eq!(least_squares(&[(1.0, 2.0)]), None);
	}
}
