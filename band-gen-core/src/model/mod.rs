//! Top-level module for band name generation.
//!
//! This module provides:
//! - Vocabulary extraction from tagged text (`Vocabulary`)
//! - Name length configuration (`NameShape`)
//! - The randomized phrase assembler (`BandNameGenerator`)

/// Deduplicated nouns and adjectives extracted from a text.
///
/// Handles normalization, tag classification, progress reporting
/// and the optional on-disk cache.
pub mod vocabulary;

/// Word-count bounds for generated names.
pub mod name_shape;

/// Randomized band name assembly over a fixed vocabulary.
///
/// Supports single draws and batched, multi-threaded generation.
pub mod generator;
