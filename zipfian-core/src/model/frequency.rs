use std::collections::HashMap;

use crate::error::{Error, Result};

/// Word occurrence counts, remembering the order in which words first appeared.
///
/// # Invariants
/// - Each word appears exactly once in `entries`
/// - `index[word]` is the position of `word` in `entries`
/// - Every count is >= 1 and the counts sum to the number of added tokens
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordCounts {
	/// Position of each word in `entries`.
	index: HashMap<String, usize>,

	/// `(word, count)` pairs in order of first appearance.
	entries: Vec<(String, usize)>,

	/// Number of tokens added so far.
	total: usize,
}

impl WordCounts {
	/// Counts every token of `tokens`.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut counts = Self::default();
		for token in tokens {
			counts.add(token.as_ref());
		}
		counts
	}

	/// Records one occurrence of `word`.
	///
	/// - Existing words have their count increased.
	/// - New words are appended with a count of 1.
	pub fn add(&mut self, word: &str) {
		match self.index.get(word) {
			Some(&position) => self.entries[position].1 += 1,
			None => {
				self.index.insert(word.to_owned(), self.entries.len());
				self.entries.push((word.to_owned(), 1));
			}
		}
		self.total += 1;
	}

	/// Returns how many times `word` was seen (0 if never).
	pub fn get(&self, word: &str) -> usize {
		self.index.get(word).map_or(0, |&position| self.entries[position].1)
	}

	/// Number of distinct words.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Sum of all counts.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Iterates over `(word, count)` in order of first appearance.
	pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
		self.entries.iter().map(|(word, count)| (word.as_str(), *count))
	}
}

/// One row of the ranked distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedWord {
	pub word: String,
	pub count: usize,
	/// `count / token_count`, always in `(0, 1]`.
	pub frequency: f64,
}

/// Result of a frequency analysis over one token sequence.
///
/// # Invariants
/// - `ranked` is sorted by non-increasing count; equal counts keep the
///   order of first appearance
/// - `ranked.len() == unique_count == counts.len()`
/// - `rare_count <= unique_count <= token_count`
/// - frequencies in `ranked` sum to 1.0 (within floating-point error)
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
	pub counts: WordCounts,
	pub ranked: Vec<RankedWord>,
	/// Words seen exactly once.
	pub rare_count: usize,
	pub unique_count: usize,
	pub token_count: usize,
}

impl Analysis {
	/// Returns at most `n` of the most frequent words.
	pub fn top(&self, n: usize) -> &[RankedWord] {
		&self.ranked[..n.min(self.ranked.len())]
	}

	/// Returns `(ln rank, ln frequency)` for every rank, starting at rank 1.
	pub fn log_log_points(&self) -> Vec<(f64, f64)> {
		self.ranked
			.iter()
			.enumerate()
			.map(|(i, entry)| (((i + 1) as f64).ln(), entry.frequency.ln()))
			.collect()
	}
}

/// Counts and ranks the words of `tokens`.
///
/// # Errors
/// Returns `Error::EmptyInput` if `tokens` is empty, since frequencies
/// would require a division by zero.
pub fn analyze<S: AsRef<str>>(tokens: &[S]) -> Result<Analysis> {
	if tokens.is_empty() {
		return Err(Error::EmptyInput);
	}

	let counts = WordCounts::from_tokens(tokens);
	let token_count = counts.total();

	let mut ranked: Vec<RankedWord> = counts
		.iter()
		.map(|(word, count)| RankedWord {
			word: word.to_owned(),
			count,
			frequency: count as f64 / token_count as f64,
		})
		.collect();
	// Stable: ties stay in first-appearance order
	ranked.sort_by(|a, b| b.count.cmp(&a.count));

	let rare_count = counts.iter().filter(|&(_, count)| count == 1).count();
	let unique_count = counts.len();

	log::debug!(
		"analyzed {} tokens: {} unique, {} rare",
		token_count, unique_count, rare_count
	);

	Ok(Analysis { counts, ranked, rare_count, unique_count, token_count })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::tokenizer::tokenize;

	#[test]
	fn cat_sat_on_the_mat() {
		let tokens = tokenize("the cat sat on the mat");
		let analysis = analyze(&tokens).unwrap();

		assert_eq!(analysis.counts.get("the"), 2);
		for word in ["cat", "sat", "on", "mat"] {
			assert_eq!(analysis.counts.get(word), 1);
		}
		assert_eq!(analysis.unique_count, 5);
		assert_eq!(analysis.rare_count, 4);
		assert_eq!(analysis.token_count, 6);
		assert_eq!(analysis.ranked[0].word, "the");
		assert!((analysis.ranked[0].frequency - 2.0 / 6.0).abs() < 1e-12);
	}

	#[test]
	fn single_repeated_word() {
		let analysis = analyze(&tokenize("Cat, cat! CAT?")).unwrap();

		assert_eq!(analysis.counts.get("cat"), 3);
		assert_eq!(analysis.unique_count, 1);
		assert_eq!(analysis.rare_count, 0);
		assert_eq!(analysis.ranked[0].frequency, 1.0);
	}

	#[test]
	fn empty_tokens_are_rejected() {
		let tokens: Vec<String> = Vec::new();
		assert!(matches!(analyze(&tokens), Err(Error::EmptyInput)));
	}

	#[test]
	fn ties_keep_first_appearance_order() {
		let analysis = analyze(&["b", "a", "c", "a", "b", "d", "c"]).unwrap();
		let order: Vec<&str> = analysis.ranked.iter().map(|r| r.word.as_str()).collect();
		assert_eq!(order, vec!["b", "a", "c", "d"]);
	}

	#[test]
	fn counts_sum_to_token_count_and_frequencies_to_one() {
		let text = "It was the best of times, it was the worst of times, it was the age \
			of wisdom, it was the age of foolishness, it was the epoch of belief";
		let tokens = tokenize(text);
		let analysis = analyze(&tokens).unwrap();

		let sum: usize = analysis.counts.iter().map(|(_, count)| count).sum();
		assert_eq!(sum, tokens.len());

		let total: f64 = analysis.ranked.iter().map(|r| r.frequency).sum();
		assert!((total - 1.0).abs() < 1e-9);

		assert!(analysis.ranked.windows(2).all(|w| w[0].count >= w[1].count));
		assert!(analysis.rare_count <= analysis.unique_count);
		assert!(analysis.unique_count <= analysis.token_count);
		assert_eq!(analysis.ranked.len(), analysis.unique_count);
	}

	#[test]
	fn analysis_is_repeatable() {
		let text = "one two two three three three";
		let first = analyze(&tokenize(text)).unwrap();
		let second = analyze(&tokenize(text)).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn top_is_bounded_by_vocabulary() {
		let analysis = analyze(&["x", "y", "x"]).unwrap();
		assert_eq!(analysis.top(5).len(), 2);
		assert_eq!(analysis.top(1)[0].word, "x");
		assert!(analysis.top(0).is_empty());
	}

	#[test]
	fn log_log_points_start_at_rank_one() {
		let analysis = analyze(&["x", "y", "x", "x"]).unwrap();
		let points = analysis.log_log_points();

		assert_eq!(points.len(), 2);
		assert_eq!(points[0].0, 0.0);
		assert!((points[0].1 - 0.75f64.ln()).abs() < 1e-12);
		assert!((points[1].0 - 2f64.ln()).abs() < 1e-12);
	}

	#[test]
	fn unseen_word_has_zero_count() {
		let counts = WordCounts::from_tokens(&["a"]);
		assert_eq!(counts.get("b"), 0);
		assert_eq!(counts.total(), 1);
		assert!(!counts.is_empty());
	}
}
