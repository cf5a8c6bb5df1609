use std::collections::HashMap;
use std::iter;

use log::debug;
use serde_json::Value;

use super::candidate::CandidateKeyword;
use super::config::AnalyzerConfig;
use crate::error::KeywordError;
use crate::text;

/// Ranks the substrings of a text by occurrence density.
///
/// # Behavior
/// - Cleans the input (see `text::clean`)
/// - Enumerates every contiguous substring of the cleaned text and counts
///   how many enumeration windows produce each distinct value
/// - Keeps words of at least `min_word_len` chars seen at least `min_count` times
/// - Takes the `top_k` most frequent, then orders them by density (descending)
///
/// # Ordering
/// Both sorts are stable. Candidates with equal keys keep their enumeration
/// order: earlier start position first, then shorter word first.
///
/// # Complexity
/// O(n²) time and memory in the cleaned length. Suited to short texts.
#[derive(Clone, Debug, Default)]
pub struct SubstringDensityAnalyzer {
	config: AnalyzerConfig,
}

/// A distinct substring and its window count.
struct Window<'a> {
	word: &'a str,
	len: usize,
	count: usize,
}

impl SubstringDensityAnalyzer {
	pub fn new(config: AnalyzerConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &AnalyzerConfig {
		&self.config
	}

	/// Analyzes `text` and returns the ranked keywords.
	///
	/// Empty input, or input without any content char, yields an empty vector.
	pub fn analyze(&self, text: &str) -> Vec<CandidateKeyword> {
		let cleaned = text::clean(text);

		// Byte offset of every char, plus the end of the string
		let boundaries: Vec<usize> = cleaned
			.char_indices()
			.map(|(offset, _)| offset)
			.chain(iter::once(cleaned.len()))
			.collect();
		let total = boundaries.len() - 1;
		if total == 0 {
			debug!("Nothing to analyze after cleaning");
			return Vec::new();
		}

		let windows = count_windows(&cleaned, &boundaries);
		debug!("{} distinct substrings over {} chars", windows.len(), total);

		let ranked = self.rank(windows, total);
		debug!("{} keywords kept", ranked.len());
		ranked
	}

	/// Analyzes a dynamically typed value.
	///
	/// # Errors
	/// Returns `InvalidInput` if `value` is not a JSON string.
	pub fn analyze_value(&self, value: &Value) -> Result<Vec<CandidateKeyword>, KeywordError> {
		match value {
			Value::String(text) => Ok(self.analyze(text)),
			other => Err(KeywordError::InvalidInput(value_kind(other).to_owned())),
		}
	}

	/// Filters, selects the most frequent and orders them by density.
	fn rank(&self, windows: Vec<Window<'_>>, total: usize) -> Vec<CandidateKeyword> {
		let mut candidates: Vec<CandidateKeyword> = windows
			.into_iter()
			.filter(|w| w.len >= self.config.min_word_len() && w.count >= self.config.min_count())
			.map(|w| CandidateKeyword::new(w.word, w.len, w.count, total))
			.collect();

		candidates.sort_by(|a, b| b.count.cmp(&a.count));
		candidates.truncate(self.config.top_k());
		candidates.sort_by(|a, b| b.density.total_cmp(&a.density));
		candidates
	}
}

/// Counts every `[i, j)` window of `cleaned`, in enumeration order.
///
/// `boundaries` holds the byte offset of each char followed by `cleaned.len()`.
fn count_windows<'a>(cleaned: &'a str, boundaries: &[usize]) -> Vec<Window<'a>> {
	let total = boundaries.len() - 1;
	let mut positions: HashMap<&'a str, usize> = HashMap::new();
	let mut windows: Vec<Window<'a>> = Vec::new();

	for i in 0..total {
		for j in i + 1..=total {
			let word = &cleaned[boundaries[i]..boundaries[j]];
			match positions.get(word) {
				Some(&position) => windows[position].count += 1,
				None => {
					positions.insert(word, windows.len());
					windows.push(Window { word, len: j - i, count: 1 });
				}
			}
		}
	}

	windows
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
