use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BandError;
use crate::io::{build_output_path, is_fresher, read_file};
use crate::nlp::{Tagger, Token, TAG_ADJECTIVE, TAG_NOUN, TAG_PLURAL_NOUN};

/// Extension of the cache file written next to the input text.
pub const CACHE_EXTENSION: &str = "vocab";

/// Sentence punctuation, commas, semicolons, exclamation marks, slashes,
/// quotes and every Unicode dash.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
	// Should not panic, the pattern is a literal
	Regex::new(r#"[.,;!/'"\p{Pd}]+"#).unwrap()
});

/// Receives extraction progress as a whole percentage.
///
/// Called at most once per distinct percentage, in increasing order.
/// Implemented for any `FnMut(u8)` closure.
pub trait Progress {
	fn percent(&mut self, percent: u8);
}

impl<F: FnMut(u8)> Progress for F {
	fn percent(&mut self, percent: u8) {
		self(percent)
	}
}

/// Normalizes a token into a vocabulary entry.
///
/// Strips punctuation, lower-cases the word and capitalizes its first
/// letter: `"lazy."` → `"Lazy"`, `"DOG"` → `"Dog"`.
///
/// Idempotent: `normalize(&normalize(w)) == normalize(w)`.
pub fn normalize(word: &str) -> String {
	let stripped = PUNCTUATION.replace_all(word, "");
	let lower = stripped.to_lowercase();
	let mut chars = lower.chars();
	let Some(first) = chars.next() else {
		return String::new();
	};

	// Multi-char uppercase forms ("ß" → "SS") keep only their head capitalized
	let mut upper = first.to_uppercase();
	let mut normalized = String::with_capacity(lower.len());
	normalized.extend(upper.next());
	normalized.extend(upper.flat_map(char::to_lowercase));
	normalized.extend(chars);
	normalized
}

/// Nouns and adjectives extracted from a text.
///
/// # Invariants
/// - Entries are normalized (see [`normalize`]) and longer than one character
/// - Each list holds no duplicates; the first occurrence wins
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
	nouns: Vec<String>,
	adjectives: Vec<String>,
}

impl Vocabulary {
	/// Builds a vocabulary from already normalized lists.
	///
	/// Entries are taken as-is; mostly useful for tests and callers
	/// bringing their own word lists.
	pub fn from_lists(nouns: Vec<String>, adjectives: Vec<String>) -> Self {
		Self { nouns, adjectives }
	}

	/// Returns the extracted nouns, in first-seen order.
	pub fn nouns(&self) -> &[String] {
		&self.nouns
	}

	/// Returns the extracted adjectives, in first-seen order.
	pub fn adjectives(&self) -> &[String] {
		&self.adjectives
	}

	/// Collects nouns (`NN`, `NNS`) and adjectives (`JJ`) from tagged tokens.
	///
	/// # Behavior
	/// - Each token is normalized; results of one character or less are dropped.
	/// - Tokens with any other tag are ignored.
	/// - A word is appended only if its list does not already hold it.
	///
	/// # Notes
	/// - Membership is a linear scan; vocabularies stay small.
	/// - `progress` receives each new percentage of tokens processed.
	pub fn extract<P: Progress + ?Sized>(tokens: &[Token], progress: &mut P) -> Self {
		let mut vocabulary = Self::default();
		let total = tokens.len();
		let mut last_percent = None;

		for (index, token) in tokens.iter().enumerate() {
			let percent = ((index + 1) * 100 / total) as u8;
			if last_percent != Some(percent) {
				progress.percent(percent);
				last_percent = Some(percent);
			}

			let word = normalize(&token.text);
			if word.chars().count() <= 1 {
				continue;
			}

			let list = match token.tag.as_str() {
				TAG_NOUN | TAG_PLURAL_NOUN => &mut vocabulary.nouns,
				TAG_ADJECTIVE => &mut vocabulary.adjectives,
				_ => continue,
			};
			if !list.contains(&word) {
				list.push(word);
			}
		}

		debug!(
			"extracted {} nouns and {} adjectives from {} tokens",
			vocabulary.nouns.len(),
			vocabulary.adjectives.len(),
			total
		);
		vocabulary
	}

	/// Tags `text` and extracts its vocabulary.
	///
	/// # Errors
	/// Propagates tagging failures.
	pub fn from_text<T, P>(text: &str, tagger: &T, progress: &mut P) -> Result<Self, BandError>
	where
		T: Tagger + ?Sized,
		P: Progress + ?Sized,
	{
		let tokens = tagger.tag(text)?;
		Ok(Self::extract(&tokens, progress))
	}

	/// Reads a text file and extracts its vocabulary.
	///
	/// # Parameters
	/// - `filepath`: Input text file.
	/// - `use_cache`: Opt-in speed-up, off by default. Reuses or writes a
	///   `postcard` cache next to the input (`lyrics.txt` → `lyrics.txt.vocab`).
	///   Extraction gives the same result with or without it.
	///
	/// # Behavior
	/// - The input file is only ever read; the cache never replaces it.
	/// - A cache is reused only while it is newer than the input file.
	/// - Unreadable or stale caches are ignored, and a failed cache write
	///   is only logged; the extracted vocabulary is returned either way.
	///
	/// # Errors
	/// - `BandError::Input` if the file cannot be read.
	/// - `BandError::Tagging` if it is not valid UTF-8 or cannot be tagged.
	pub fn load<PF, T, P>(filepath: PF, tagger: &T, progress: &mut P, use_cache: bool) -> Result<Self, BandError>
	where
		PF: AsRef<Path>,
		T: Tagger + ?Sized,
		P: Progress + ?Sized,
	{
		let path = filepath.as_ref();
		let bytes = read_file(path)?;
		info!("Using file {}, {}kb", path.display(), bytes.len() / 1000);

		let cache_path = if use_cache {
			build_output_path(path, CACHE_EXTENSION).ok().filter(|cache_path| cache_path != path)
		} else {
			None
		};

		if let Some(cache_path) = &cache_path {
			if is_fresher(cache_path, path) {
				match Self::read_cache(cache_path) {
					Ok(vocabulary) => {
						debug!("reusing vocabulary cache {}", cache_path.display());
						progress.percent(100);
						return Ok(vocabulary);
					}
					Err(e) => warn!("ignoring vocabulary cache: {e}"),
				}
			}
		}

		let tokens = tagger.tag_bytes(&bytes)?;
		let vocabulary = Self::extract(&tokens, progress);

		if let Some(cache_path) = &cache_path {
			if let Err(e) = vocabulary.write_cache(cache_path) {
				warn!("could not write vocabulary cache: {e}");
			}
		}

		Ok(vocabulary)
	}

	/// Fails unless both lists hold at least one word.
	///
	/// # Errors
	/// Returns `BandError::InsufficientVocabulary` naming the empty list.
	pub fn ensure_usable(&self) -> Result<(), BandError> {
		if self.nouns.is_empty() {
			return Err(BandError::InsufficientVocabulary("nouns"));
		}
		if self.adjectives.is_empty() {
			return Err(BandError::InsufficientVocabulary("adjectives"));
		}
		Ok(())
	}

	fn read_cache(cache_path: &Path) -> Result<Self, BandError> {
		let bytes = read_file(cache_path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}

	fn write_cache(&self, cache_path: &Path) -> Result<(), BandError> {
		let bytes = postcard::to_stdvec(self)?;
		fs::write(cache_path, bytes)
			.map_err(|source| BandError::Input { path: cache_path.to_path_buf(), source })
	}
}
