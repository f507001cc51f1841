//! Tokenization and part-of-speech tagging.
//!
//! The rest of the crate only depends on the [`Tagger`] trait, so any
//! tagger producing Penn-Treebank tags can be plugged in. [`LexiconTagger`]
//! is the built-in implementation: a lexicon plus suffix and context rules,
//! needing no model files.

use crate::error::BandError;

/// Closed- and open-class word lists used by the built-in tagger.
mod lexicon;

/// Rule-based Penn-Treebank tagger.
pub mod tagger;

pub use tagger::LexiconTagger;

/// Penn tag for singular or mass nouns.
pub const TAG_NOUN: &str = "NN";
/// Penn tag for plural nouns.
pub const TAG_PLURAL_NOUN: &str = "NNS";
/// Penn tag for adjectives.
pub const TAG_ADJECTIVE: &str = "JJ";

/// A word (or punctuation mark) together with its part-of-speech tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
	/// Surface form, exactly as it appeared in the text.
	pub text: String,
	/// Penn-Treebank tag (`NN`, `NNS`, `JJ`, `VBZ`, ...).
	pub tag: String,
}

impl Token {
	pub fn new(text: &str, tag: &str) -> Self {
		Self { text: text.to_owned(), tag: tag.to_owned() }
	}
}

/// Splits a text into tagged tokens.
///
/// Implementations must return tokens in text order.
pub trait Tagger {
	/// Tokenizes and tags `text`.
	///
	/// # Errors
	/// Returns `BandError::Tagging` if the text cannot be processed.
	fn tag(&self, text: &str) -> Result<Vec<Token>, BandError>;

	/// Decodes `bytes` as UTF-8, then tags the result.
	///
	/// # Errors
	/// Returns `BandError::Tagging` on malformed encoding.
	fn tag_bytes(&self, bytes: &[u8]) -> Result<Vec<Token>, BandError> {
		let text = std::str::from_utf8(bytes)
			.map_err(|e| BandError::Tagging(format!("input is not valid UTF-8: {e}")))?;
		self.tag(text)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_bytes_are_a_tagging_error() {
		let result = LexiconTagger::new().tag_bytes(&[b'o', b'k', 0xff, 0xfe]);
		match result {
			Err(BandError::Tagging(message)) => assert!(message.contains("UTF-8")),
			other => panic!("Expected Tagging error, got {:?}", other),
		}
	}
}
