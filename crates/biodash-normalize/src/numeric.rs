//! Count and currency parsing.

/// Parse a headcount cell as an integer. Anything non-numeric is unknown,
/// including the empty cell: a blank must never be read as a zero, or
/// "no data" would masquerade as "nobody affected".
pub fn parse_count(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Parse a currency-ish cell by stripping every character that is not a
/// digit or decimal point, then converting. `"$125,000"` parses to 125000;
/// a cell with nothing left after stripping is unknown. Values are
/// non-negative by construction since a minus sign never survives.
pub fn parse_currency(value: &str) -> Option<f64> {
    let digits: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
