use std::fs;
use std::path::Path;

use crate::error::KeywordError;

/// Reads a whole text file into a `String`.
pub fn read_text<P: AsRef<Path>>(filename: P) -> Result<String, KeywordError> {
	Ok(fs::read_to_string(filename)?)
}

/// Reads a text file and returns its non-blank lines.
///
/// - Splits on `\n` / `\r\n`
/// - Lines made only of whitespace are dropped
pub fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, KeywordError> {
	let contents = read_text(filename)?;
	Ok(contents
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(str::to_owned)
		.collect())
}
