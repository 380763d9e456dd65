//! Report-year resolution.

/// Closed lookup for the 2-digit year abbreviations the source data
/// actually contains. Deliberately not a general pivot heuristic.
const TWO_DIGIT_YEARS: &[(&str, i32)] = &[
    ("22", 2022),
    ("23", 2023),
    ("24", 2024),
    ("25", 2025),
];

/// Resolve raw year text. Exactly four digits parses as-is; the four known
/// 2-digit abbreviations map through the lookup; every other shape,
/// including the empty cell, is unknown.
pub fn resolve_year(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.len() == 4 && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
        return trimmed.parse().ok();
    }
    TWO_DIGIT_YEARS
        .iter()
        .find(|(abbreviation, _)| *abbreviation == trimmed)
        .map(|(_, year)| *year)
}

#[cfg(test)]
mod tests {
    use super::resolve_year;

    #[test]
    fn four_digit_years_parse() {
        assert_eq!(resolve_year("2024"), Some(2024));
        assert_eq!(resolve_year(" 2023 "), Some(2023));
    }

    #[test]
    fn known_abbreviations_map() {
        assert_eq!(resolve_year("22"), Some(2022));
        assert_eq!(resolve_year("24"), Some(2024));
        assert_eq!(resolve_year("25"), Some(2025));
    }

    #[test]
    fn everything_else_is_unknown() {
        assert_eq!(resolve_year("202"), None);
        assert_eq!(resolve_year("21"), None);
        assert_eq!(resolve_year("20245"), None);
        assert_eq!(resolve_year("FY24"), None);
        assert_eq!(resolve_year(""), None);
    }
}
