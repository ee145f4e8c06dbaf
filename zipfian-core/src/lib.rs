//! Lexical statistics over natural-language text.
//!
//! This crate provides the analysis pipeline behind the `zipfian` tool:
//! - Tokenization of raw text into lowercase alphanumeric words
//! - Word counts and a rank-sorted frequency distribution
//! - A log-log least-squares fit of frequency against rank (Zipf's law)
//! - A first-order Markov chain over consecutive words
//!
//! Everything except `read_text` is pure: no I/O, no global state.
//! Presentation (console report, plot) is left to the caller.

/// Error taxonomy shared by every stage of the pipeline.
pub mod error;

/// Tokenization, frequency analysis, fitting and the Markov chain.
pub mod model;

/// File loading.
///
/// Only `read_text` is re-exported.
pub(crate) mod io;

pub use error::{Error, Result};
pub use io::read_text;
