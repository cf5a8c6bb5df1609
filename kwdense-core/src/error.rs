use thiserror::Error;

/// Errors raised by the keyword density library.
#[derive(Debug, Error)]
pub enum KeywordError {
	/// The value handed to the analyzer is not a string.
	#[error("invalid input: expected a string, got {0}")]
	InvalidInput(String),

	/// An analyzer setting is out of range.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}
