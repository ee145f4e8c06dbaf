//! Top-level module for the text statistics pipeline.
//!
//! The pipeline runs leaves first:
//! - Tokenization of raw text (`tokenizer`)
//! - Word counting and ranking (`frequency`)
//! - Log-log rank/frequency fitting (`zipf_fit`)
//! - Word transition modelling (`markov_chain`)
//! - Run parameters (`config`)

/// Splits raw text into lowercase alphanumeric words.
pub mod tokenizer;

/// Word counts, rank-sorted frequencies, rare and unique word counts.
///
/// Ranking is stable: words with equal counts keep their order of first
/// appearance in the text.
pub mod frequency;

/// Ordinary least-squares fit of ln(frequency) against ln(rank)
/// over an interior slice of the ranked distribution.
pub mod zipf_fit;

/// First-order Markov chain over consecutive words.
///
/// Supports transition probabilities and seeded random walks.
pub mod markov_chain;

/// Internal representation of a single Markov state (one word).
///
/// Tracks outgoing transitions and supports weighted random sampling.
/// This module is not exposed publicly.
mod state;

/// Analysis parameters (fit window, report size) with validated setters.
pub mod config;
