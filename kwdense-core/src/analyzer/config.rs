use crate::error::KeywordError;

/// Thresholds applied when ranking candidates.
///
/// # Invariants
/// - Every field is >= 1
///
/// The defaults keep words longer than one char that occur at least twice,
/// and return the ten best.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalyzerConfig {
	/// Minimum word length in chars.
	min_word_len: usize,

	/// Minimum number of occurrences.
	min_count: usize,

	/// Maximum number of results.
	top_k: usize,
}

impl Default for AnalyzerConfig {
	fn default() -> Self {
		Self { min_word_len: 2, min_count: 2, top_k: 10 }
	}
}

impl AnalyzerConfig {
	/// Builds a configuration, validating every value.
	///
	/// # Errors
	/// Returns `InvalidConfig` if any value is 0.
	pub fn new(min_word_len: usize, min_count: usize, top_k: usize) -> Result<Self, KeywordError> {
		let mut config = Self::default();
		config.set_min_word_len(min_word_len)?;
		config.set_min_count(min_count)?;
		config.set_top_k(top_k)?;
		Ok(config)
	}

	pub fn min_word_len(&self) -> usize {
		self.min_word_len
	}

	pub fn min_count(&self) -> usize {
		self.min_count
	}

	pub fn top_k(&self) -> usize {
		self.top_k
	}

	/// Sets the minimum word length (in chars).
	///
	/// # Errors
	/// Returns `InvalidConfig` if `min_word_len` is 0.
	pub fn set_min_word_len(&mut self, min_word_len: usize) -> Result<(), KeywordError> {
		self.min_word_len = at_least_one("min_word_len", min_word_len)?;
		Ok(())
	}

	/// Sets the minimum occurrence count.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `min_count` is 0.
	pub fn set_min_count(&mut self, min_count: usize) -> Result<(), KeywordError> {
		self.min_count = at_least_one("min_count", min_count)?;
		Ok(())
	}

	/// Sets the maximum number of returned keywords.
	///
	/// # Errors
	/// Returns `InvalidConfig` if `top_k` is 0.
	pub fn set_top_k(&mut self, top_k: usize) -> Result<(), KeywordError> {
		self.top_k = at_least_one("top_k", top_k)?;
		Ok(())
	}
}

fn at_least_one(name: &str, value: usize) -> Result<usize, KeywordError> {
	if value == 0 {
		return Err(KeywordError::InvalidConfig(format!("{name} must be >= 1")));
	}
	Ok(value)
}
