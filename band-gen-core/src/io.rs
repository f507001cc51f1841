use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

use crate::error::BandError;

/// Reads a whole file as raw bytes.
///
/// Decoding is left to the tagger so that malformed text is reported as a
/// tagging failure rather than an I/O one.
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>, BandError> {
	let path = filename.as_ref();
	let mut contents = Vec::new();
	File::open(path)
		.and_then(|mut file| file.read_to_end(&mut contents))
		.map_err(|source| BandError::Input { path: path.to_path_buf(), source })?;
	Ok(contents)
}

/// Builds an output path by appending an extension to the input file name.
///
/// The result always differs from the input path.
///
/// Example:
/// `data/lyrics.txt` + `"vocab"` → `data/lyrics.txt.vocab`
pub(crate) fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();

	let file_name = input_path
		.file_name()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output_name = file_name.to_os_string();
	output_name.push(".");
	output_name.push(output_extension);

	Ok(input_path.with_file_name(output_name))
}

/// Returns `true` when `derived` exists and was modified after `source`.
///
/// Any metadata error counts as stale.
pub(crate) fn is_fresher<P: AsRef<Path>, Q: AsRef<Path>>(derived: P, source: Q) -> bool {
	let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified());
	match (modified(derived.as_ref()), modified(source.as_ref())) {
		(Ok(derived), Ok(source)) => derived >= source,
		_ => false,
	}
}
