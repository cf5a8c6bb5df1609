use std::sync::mpsc;
use std::thread;

use log::debug;

use super::candidate::CandidateKeyword;
use super::density::SubstringDensityAnalyzer;

/// Analyzes many independent texts in parallel.
///
/// # Behavior
/// - Splits `texts` into chunks (based on CPU cores * factor)
/// - Spawns one thread per chunk, each running the sequential analyzer
/// - Collects `(index, result)` pairs over an MPSC channel
///
/// # Returns
/// One result per input text, in input order. Each result is identical to
/// `analyzer.analyze(text)`.
pub fn analyze_batch(analyzer: &SubstringDensityAnalyzer, texts: &[String]) -> Vec<Vec<CandidateKeyword>> {
	if texts.is_empty() {
		return Vec::new();
	}

	let cpus = num_cpus::get();
	let factor = 4;
	let chunks = cpus * factor;
	let chunk_size = texts.len().div_ceil(chunks);
	debug!("Analyzing {} texts in chunks of {}", texts.len(), chunk_size);

	let (tx, rx) = mpsc::channel();
	thread::scope(|scope| {
		for (chunk_index, chunk) in texts.chunks(chunk_size).enumerate() {
			let tx = tx.clone();
			scope.spawn(move || {
				for (offset, text) in chunk.iter().enumerate() {
					// The receiver outlives the scope, sending cannot fail
					let _ = tx.send((chunk_index * chunk_size + offset, analyzer.analyze(text)));
				}
			});
		}
	});
	drop(tx);

	let mut results = vec![Vec::new(); texts.len()];
	for (index, result) in rx.iter() {
		results[index] = result;
	}
	results
}
