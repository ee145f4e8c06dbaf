use std::collections::BTreeMap;

use rand::Rng;

/// A state of the word-level Markov chain.
///
/// A `State` corresponds to one word (`key`) and stores every observed
/// transition from this word to the word that followed it.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences while the chain is built
/// - Report transition probabilities
/// - Pick the next word using weighted random sampling
///
/// ## Invariants
/// - All transitions belong to the same `key`
/// - Each transition occurrence count is strictly positive
/// - `total` is the sum of all occurrence counts
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct State {
	/// The word this state stands for.
	key: String,
	/// Outgoing transitions indexed by the next word.
	/// Sorted, so that sampling with a seeded RNG is reproducible.
	/// Example: { "cat" => 2, "mat" => 1 }
	transitions: BTreeMap<String, usize>,
	/// Total number of outgoing observations.
	total: usize,
}

impl State {
	/// Creates a new empty state for the given word.
	pub(crate) fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			transitions: BTreeMap::new(),
			total: 0,
		}
	}

	pub(crate) fn key(&self) -> &str {
		&self.key
	}

	/// Records an occurrence of a transition toward `next`.
	pub(crate) fn add_transition(&mut self, next: &str) {
		match self.transitions.get_mut(next) {
			Some(occurrence) => *occurrence += 1,
			None => {
				self.transitions.insert(next.to_owned(), 1);
			}
		}
		self.total += 1;
	}

	/// Number of distinct following words.
	pub(crate) fn len(&self) -> usize {
		self.transitions.len()
	}

	pub(crate) fn total(&self) -> usize {
		self.total
	}

	/// Share of the observations from this state that went to `next`.
	pub(crate) fn probability(&self, next: &str) -> f64 {
		match self.transitions.get(next) {
			Some(&occurrence) if self.total > 0 => occurrence as f64 / self.total as f64,
			_ => 0.0,
		}
	}

	/// Predicts the next word using weighted random sampling.
	///
	/// The probability of selecting a word is proportional to its
	/// occurrence count. Returns `None` if the state has no transitions.
	pub(crate) fn predict<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		if self.total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..self.total);
		for (next, &occurrence) in &self.transitions {
			if r < occurrence {
				return Some(next.as_str());
			}
			r -= occurrence;
		}

		// Unreachable while `total` matches the transitions
		self.transitions.keys().next_back().map(String::as_str)
	}
}
