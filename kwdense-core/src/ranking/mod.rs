//! Mocked search popularity ranking for phone models.
//!
//! There is no data source behind this module: each model has a fixed base
//! index and every call applies a small random fluctuation to it.

use rand::Rng;
use serde::Serialize;

/// Phone models and their base popularity index.
pub const BASE_INDICES: [(&str, u32); 16] = [
	("iPhone 17 Pro", 8800),
	("iPhone 17 Pro Max", 8500),
	("iPhone 17", 7800),
	("华为Mate 80 Pro", 8600),
	("华为Mate 80 Pro+", 8300),
	("华为Mate X6", 8000),
	("小米16 Pro", 8200),
	("小米16 Ultra", 7900),
	("Redmi K90 Pro", 7800),
	("Redmi K90", 7300),
	("vivo X200 Pro", 7500),
	("OPPO Find X9 Pro", 7300),
	("荣耀Magic 8 Pro", 7000),
	("iQOO 14 Pro", 6800),
	("一加14", 6500),
	("Galaxy S26 Ultra", 6200),
];

/// Index used for a model missing from `BASE_INDICES`.
pub const DEFAULT_BASE_INDEX: u32 = 6000;

/// Maximum relative fluctuation applied to a base index (±5%).
pub const FLUCTUATION: f64 = 0.05;

/// One line of the ranking.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RankingEntry {
	pub word: String,
	pub index: u32,
}

/// Returns the base index of `model`, or `DEFAULT_BASE_INDEX` if unknown.
pub fn base_index(model: &str) -> u32 {
	BASE_INDICES
		.iter()
		.find(|(name, _)| *name == model)
		.map(|(_, index)| *index)
		.unwrap_or(DEFAULT_BASE_INDEX)
}

/// Generates a ranking of every known model, most popular first.
///
/// Each index is `base * (1 + f)` rounded, with `f` uniform in `[-5%, +5%)`.
/// Entries with equal indices keep the `BASE_INDICES` order.
pub fn generate_ranking<R: Rng>(rng: &mut R) -> Vec<RankingEntry> {
	let mut entries: Vec<RankingEntry> = BASE_INDICES
		.iter()
		.map(|(model, _)| RankingEntry {
			word: (*model).to_owned(),
			index: fluctuate(base_index(model), rng),
		})
		.collect();

	entries.sort_by(|a, b| b.index.cmp(&a.index));
	entries
}

fn fluctuate<R: Rng>(base: u32, rng: &mut R) -> u32 {
	let fluctuation = rng.random_range(-FLUCTUATION..FLUCTUATION);
	(base as f64 * (1.0 + fluctuation)).round() as u32
}
