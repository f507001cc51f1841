use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every way a band name run can fail.
///
/// All variants are terminal for the command-line front end: they are
/// reported once and the process exits.
#[derive(Debug, Error)]
pub enum BandError {
	/// The input file is missing or unreadable.
	#[error("cannot access file {}: {source}", path.display())]
	Input {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The tokenizer could not process the input text.
	#[error("tagging failed: {0}")]
	Tagging(String),

	/// Extraction produced no nouns or no adjectives.
	#[error("insufficient vocabulary: no {0} found in the input text")]
	InsufficientVocabulary(&'static str),

	/// The requested word range cannot produce a name.
	#[error("invalid name shape: {0}")]
	InvalidShape(String),

	/// The vocabulary cache could not be encoded or decoded.
	#[error("vocabulary cache error: {0}")]
	Cache(#[from] postcard::Error),
}
