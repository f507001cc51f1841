//! Band name generation library.
//!
//! This crate turns an arbitrary text into a pool of nouns and adjectives
//! and recombines them into short band names:
//! - Tokenization and Penn-Treebank style part-of-speech tagging
//! - Deduplicated vocabulary extraction, with an optional on-disk cache
//! - Randomized phrase assembly with a configurable word range
//!
//! File helpers are kept internal; everything else is reachable through
//! `model` and `nlp`.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Vocabulary extraction and name generation.
pub mod model;

/// Tokenizer and part-of-speech tagger.
pub mod nlp;

/// I/O utilities (file loading, cache paths).
///
/// Not exposed
pub(crate) mod io;

pub use error::BandError;
