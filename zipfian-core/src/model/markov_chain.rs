use std::collections::HashMap;

use rand::Rng;

use super::state::State;

/// First-order Markov chain over the words of a text.
///
/// Each word that is followed by another word owns a `State` counting
/// which words came next. This is the sparse form of the word-by-word
/// transition matrix.
///
/// # Responsibilities
/// - Build the chain from a token sequence
/// - Answer transition probabilities
/// - Predict a next word or walk a sequence of words
///
/// # Invariants
/// - Each entry of `states` is keyed by the word its `State` stands for
/// - `observations` equals the sum of every state's total
#[derive(Clone, Debug, Default)]
pub struct MarkovChain {
	/// Mapping from a word to the transitions leaving it.
	states: HashMap<String, State>,

	/// Number of consecutive word pairs recorded.
	observations: usize,
}

impl MarkovChain {
	/// Builds a chain from consecutive pairs of `tokens`.
	///
	/// A sequence of fewer than two tokens produces an empty chain.
	pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
		let mut chain = Self::default();
		for pair in tokens.windows(2) {
			chain.add_transition(pair[0].as_ref(), pair[1].as_ref());
		}
		log::debug!(
			"markov chain: {} states, {} transitions, {} observations",
			chain.state_count(),
			chain.transition_count(),
			chain.observations
		);
		chain
	}

	/// Records one observation of `next` following `word`.
	pub fn add_transition(&mut self, word: &str, next: &str) {
		// Get or create the state for this word
		let state = self.states.entry(word.to_owned()).or_insert_with(|| State::new(word));
		debug_assert_eq!(state.key(), word);
		state.add_transition(next);
		self.observations += 1;
	}

	/// Number of words with at least one outgoing transition.
	pub fn state_count(&self) -> usize {
		self.states.len()
	}

	/// Number of distinct `(word, next)` pairs.
	pub fn transition_count(&self) -> usize {
		self.states.values().map(State::len).sum()
	}

	/// Total number of word pairs recorded.
	pub fn observations(&self) -> usize {
		self.observations
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Probability that `next` follows `word`.
	///
	/// Returns 0.0 if `word` was never followed by anything.
	pub fn probability(&self, word: &str, next: &str) -> f64 {
		self.states.get(word).map_or(0.0, |state| state.probability(next))
	}

	/// Total number of times `word` was followed by another word.
	pub fn outgoing(&self, word: &str) -> usize {
		self.states.get(word).map_or(0, State::total)
	}

	/// Picks a word to follow `word`, weighted by observed counts.
	///
	/// Returns `None` if `word` is unknown or never had a successor.
	pub fn predict<R: Rng + ?Sized>(&self, word: &str, rng: &mut R) -> Option<&str> {
		self.states.get(word)?.predict(rng)
	}

	/// Generates up to `max_len` words starting with `start`.
	///
	/// # Notes
	/// - `start` is always the first word, even if the chain does not know it
	/// - Stops early when the current word has no successor
	/// - `max_len == 0` yields an empty sequence
	pub fn walk<R: Rng + ?Sized>(&self, start: &str, max_len: usize, rng: &mut R) -> Vec<String> {
		let mut words = Vec::with_capacity(max_len);
		if max_len == 0 {
			return words;
		}

		let mut current = start.to_owned();
		while words.len() + 1 < max_len {
			let Some(next) = self.predict(&current, rng) else {
				break;
			};
			let next = next.to_owned();
			words.push(std::mem::replace(&mut current, next));
		}
		words.push(current);
		words
	}
}
