//! Substring density analysis.
//!
//! This module contains:
//! - The ranked output record (`CandidateKeyword`)
//! - The analyzer thresholds (`AnalyzerConfig`)
//! - The analyzer itself (`SubstringDensityAnalyzer`)
//! - Parallel analysis of independent texts (`analyze_batch`)

/// Parallel analysis of many independent texts.
pub mod batch;

/// Output record of an analysis.
pub mod candidate;

/// Filtering and truncation thresholds.
pub mod config;

/// Substring enumeration, counting and ranking.
pub mod density;

pub use batch::analyze_batch;
pub use candidate::CandidateKeyword;
pub use config::AnalyzerConfig;
pub use density::SubstringDensityAnalyzer;

/// Analyzes `text` with the default thresholds.
///
/// Shorthand for `SubstringDensityAnalyzer::default().analyze(text)`.
pub fn analyze(text: &str) -> Vec<CandidateKeyword> {
	SubstringDensityAnalyzer::default().analyze(text)
}
