use serde::Serialize;

/// A preset keyword and its optional category.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Keyword {
	pub word: &'static str,
	pub category: Option<&'static str>,
}

const fn keyword(word: &'static str, category: &'static str) -> Keyword {
	Keyword { word, category: Some(category) }
}

/// The preset keyword library.
pub const KEYWORDS: [Keyword; 15] = [
	keyword("人工智能", "技术"),
	keyword("机器学习", "技术"),
	keyword("大数据", "技术"),
	keyword("云计算", "技术"),
	keyword("区块链", "技术"),
	keyword("数据科学", "技术"),
	keyword("深度学习", "技术"),
	keyword("自然语言处理", "技术"),
	keyword("计算机视觉", "技术"),
	keyword("数据分析", "技术"),
	keyword("创新", "通用"),
	keyword("发展", "通用"),
	keyword("趋势", "通用"),
	keyword("应用", "通用"),
	keyword("解决方案", "通用"),
];

/// All preset words.
pub fn keywords() -> Vec<&'static str> {
	KEYWORDS.iter().map(|k| k.word).collect()
}

/// Preset words belonging to `category`.
pub fn keywords_by_category(category: &str) -> Vec<&'static str> {
	KEYWORDS
		.iter()
		.filter(|k| k.category == Some(category))
		.map(|k| k.word)
		.collect()
}

/// Distinct non-empty categories, in order of first appearance.
pub fn categories() -> Vec<&'static str> {
	let mut categories: Vec<&'static str> = Vec::new();
	for category in KEYWORDS.iter().filter_map(|k| k.category) {
		if !category.is_empty() && !categories.contains(&category) {
			categories.push(category);
		}
	}
	categories
}
