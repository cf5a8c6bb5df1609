use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns `true` when `c` carries content for keyword extraction.
///
/// Whitespace, punctuation (`P*`), symbols (`S*`) and decimal digits (`Nd`)
/// are noise. Everything else is kept, including combining marks and
/// characters outside the BMP.
pub fn is_content_char(c: char) -> bool {
	// U+FEFF (BOM) is not `White_Space`
	if c.is_whitespace() || c == '\u{feff}' {
		return false;
	}

	!matches!(
		get_general_category(c),
		GeneralCategory::ConnectorPunctuation
			| GeneralCategory::DashPunctuation
			| GeneralCategory::OpenPunctuation
			| GeneralCategory::ClosePunctuation
			| GeneralCategory::InitialPunctuation
			| GeneralCategory::FinalPunctuation
			| GeneralCategory::OtherPunctuation
			| GeneralCategory::MathSymbol
			| GeneralCategory::CurrencySymbol
			| GeneralCategory::ModifierSymbol
			| GeneralCategory::OtherSymbol
			| GeneralCategory::DecimalNumber
	)
}

/// Removes every non-content character, preserving the order of the rest.
pub fn clean(text: &str) -> String {
	text.chars().filter(|c| is_content_char(*c)).collect()
}
