// Unified search: catalog filtering plus reverse lookup of inflected forms.

use std::collections::HashSet;

use crate::index::ReverseIndex;
use crate::normalize::normalize_query;
use crate::types::{IndexEntry, SearchResults, VerbEntry};

/// Default cap on form matches.
pub const DEFAULT_FORM_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of form matches returned.
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_FORM_LIMIT,
        }
    }
}

/// Search with the default options.
pub fn resolve<'a, I>(query: &str, catalog: I, index: &'a ReverseIndex) -> SearchResults<'a>
where
    I: IntoIterator<Item = &'a VerbEntry>,
{
    resolve_with(query, catalog, index, &SearchOptions::default())
}

/// Search `catalog` (which may be a caller-filtered view, e.g. favorites) by
/// verb and gloss, and `index` by inflected form.
///
/// Form matches come from an exact key lookup, or from every key with the
/// query as prefix when the exact lookup is empty. They are deduplicated by
/// (verb, tense, person), capped at `options.limit`, and a match whose form
/// is the bare infinitive of a verb already in the verb matches is dropped.
pub fn resolve_with<'a, I>(
    query: &str,
    catalog: I,
    index: &'a ReverseIndex,
    options: &SearchOptions,
) -> SearchResults<'a>
where
    I: IntoIterator<Item = &'a VerbEntry>,
{
    let q = normalize_query(query);

    if q.is_empty() {
        return SearchResults {
            verb_matches: catalog.into_iter().collect(),
            form_matches: vec![],
        };
    }

    let verb_matches: Vec<&VerbEntry> = catalog
        .into_iter()
        .filter(|v| v.verb.to_lowercase().contains(&q) || v.gloss.to_lowercase().contains(&q))
        .collect();

    let exact = index.lookup(&q);
    let candidates: Vec<&IndexEntry> = if exact.is_empty() {
        index.lookup_prefix(&q)
    } else {
        exact.iter().collect()
    };

    let mut seen = HashSet::new();
    let mut form_matches: Vec<&IndexEntry> = candidates
        .into_iter()
        .filter(|&e| seen.insert((e.verb.as_str(), e.tense, e.person)))
        .take(options.limit)
        .collect();

    form_matches.retain(|e| !(e.form == e.verb && verb_matches.iter().any(|v| v.verb == e.verb)));

    SearchResults {
        verb_matches,
        form_matches,
    }
}
