use serde::Serialize;

/// A distinct substring of the cleaned text with its score.
///
/// Serialized as `{ "word": ..., "count": ..., "density": ... }`.
///
/// # Invariants
/// - `density == count * len(word) / total * 100` where `total` is the
///   cleaned text length (in chars) of the analyzed input
/// - `density` is never negative
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CandidateKeyword {
	/// The substring itself.
	pub word: String,

	/// Number of enumeration windows equal to `word`.
	pub count: usize,

	/// Weighted frequency, as a percentage of the cleaned text.
	pub density: f64,
}

impl CandidateKeyword {
	/// Builds a candidate and computes its density.
	///
	/// `word_len` is the length of `word` in chars, `total` the length of the
	/// cleaned text. A `total` of 0 yields a density of 0.
	pub fn new(word: &str, word_len: usize, count: usize, total: usize) -> Self {
		Self {
			word: word.to_owned(),
			count,
			density: density(count, word_len, total),
		}
	}

	/// Length of `word` in chars.
	pub fn char_len(&self) -> usize {
		self.word.chars().count()
	}
}

/// `count * word_len / total * 100`, or 0 when `total` is 0.
pub fn density(count: usize, word_len: usize, total: usize) -> f64 {
	if total == 0 {
		return 0.0;
	}
	(count * word_len) as f64 / total as f64 * 100.0
}
