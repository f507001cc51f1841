use std::ops::RangeInclusive;

use crate::error::BandError;

/// Fewest words a band name may have.
pub const MIN_WORDS: usize = 2;

/// Word-count bounds for generated band names.
///
/// Every name is drawn with a length chosen uniformly in
/// `min_words..=max_words`; the last word is always a noun.
///
/// # Invariants
/// - `MIN_WORDS <= min_words <= max_words`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameShape {
	/// Shortest name, in words.
	min_words: usize,

	/// Longest name, in words.
	max_words: usize,
}

impl Default for NameShape {
	/// Two to four words.
	fn default() -> Self {
		Self { min_words: MIN_WORDS, max_words: 4 }
	}
}

impl NameShape {
	/// Creates a shape producing names of `min_words..=max_words` words.
	///
	/// # Errors
	/// Returns `BandError::InvalidShape` if the range is empty or starts
	/// below `MIN_WORDS`.
	pub fn new(min_words: usize, max_words: usize) -> Result<Self, BandError> {
		let mut shape = Self::default();
		shape.set_word_range(min_words, max_words)?;
		Ok(shape)
	}

	/// Returns the shortest allowed length.
	pub fn min_words(&self) -> usize {
		self.min_words
	}

	/// Returns the longest allowed length.
	pub fn max_words(&self) -> usize {
		self.max_words
	}

	/// Returns the range name lengths are drawn from.
	pub fn word_range(&self) -> RangeInclusive<usize> {
		self.min_words..=self.max_words
	}

	/// Sets both bounds at once.
	///
	/// The shape is left untouched on error.
	///
	/// # Errors
	/// Returns `BandError::InvalidShape` if `min_words < MIN_WORDS` or
	/// `min_words > max_words`.
	pub fn set_word_range(&mut self, min_words: usize, max_words: usize) -> Result<(), BandError> {
		if min_words < MIN_WORDS {
			return Err(BandError::InvalidShape(format!(
				"names need at least {MIN_WORDS} words, got a minimum of {min_words}"
			)));
		}
		if min_words > max_words {
			return Err(BandError::InvalidShape(format!(
				"minimum of {min_words} words exceeds maximum of {max_words}"
			)));
		}
		self.min_words = min_words;
		self.max_words = max_words;
		Ok(())
	}
}
