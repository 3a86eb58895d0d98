// Surface-form normalization shared by index construction and lookup.

/// Placeholder for the 2nd-singular imperative slot that has no form.
pub const UNUSED_SLOT: char = '—';

/// Separator between alternate spellings held in one slot ("faz/faze").
pub const ALTERNATE_SEPARATOR: char = '/';

/// Normalize a user query: trim surrounding whitespace and case-fold.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Split a slot into its alternate spellings, trimmed, original case kept.
/// Empty pieces are skipped.
pub fn alternates(slot: &str) -> impl Iterator<Item = &str> {
    slot.split(ALTERNATE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Index keys for one slot: case-folded, placeholder removed, one key per
/// alternate spelling. A placeholder-only slot yields no keys.
pub fn index_keys(slot: &str) -> Vec<String> {
    let folded: String = slot
        .to_lowercase()
        .chars()
        .filter(|&c| c != UNUSED_SLOT)
        .collect();
    alternates(&folded).map(str::to_string).collect()
}
