//! Keyword density analysis library.
//!
//! This crate provides the analysis kernel and the small data helpers
//! behind the keyword density tools:
//! - Unicode-aware text cleaning
//! - Substring enumeration, counting and density ranking
//! - A mocked popularity ranking for phone models
//! - A preset keyword library
//!
//! The analyzer is a pure function of its input. Everything that touches
//! the outside world (HTTP, terminal, files) lives in the front-end crates.

/// Substring density analysis (the core algorithm).
///
/// Exposes `SubstringDensityAnalyzer`, its configuration and the
/// ranked `CandidateKeyword` records it produces.
pub mod analyzer;

/// Crate error type.
pub mod error;

/// Preset keyword library grouped by category.
pub mod keywords;

/// Mocked popularity ranking generator.
pub mod ranking;

/// Text cleaning (character classification).
pub mod text;

/// I/O utilities (file loading) used by the front ends.
pub mod io;

pub use analyzer::{analyze, CandidateKeyword, SubstringDensityAnalyzer};
pub use error::KeywordError;
