//! Free-text field cleanup.

/// Canonical spellings for job titles that appear under more than one name
/// in the survey.
const ROLE_SYNONYMS: &[(&str, &str)] = &[("Scientist I", "Scientist")];

/// Trim a free-text cell; a blank becomes unknown.
pub fn clean_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Clean a job title and fold synonyms onto their canonical spelling.
pub fn canonical_role(value: &str) -> Option<String> {
    let cleaned = clean_text(value)?;
    let canonical = ROLE_SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == cleaned)
        .map_or(cleaned, |(_, canonical)| (*canonical).to_string());
    Some(canonical)
}
