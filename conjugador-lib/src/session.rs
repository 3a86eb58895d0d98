// Session: owns the lexicon and memoizes the derived data built from it.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::conjugation::conjugate;
use crate::index::ReverseIndex;
use crate::lexicon::{Irregulars, Lexicon};
use crate::search::{resolve_with, SearchOptions};
use crate::types::{ConjugationTable, SearchResults, VerbEntry};

/// Composition root for a front end: built once at startup and passed to
/// whatever needs read access.
///
/// The reverse index is built on first use and then shared read-only.
/// Conjugation tables are cached per verb.
pub struct Session {
    lexicon: Lexicon,
    options: SearchOptions,
    index: OnceLock<ReverseIndex>,
    tables: Mutex<HashMap<String, Arc<ConjugationTable>>>,
}

impl Session {
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_options(lexicon, SearchOptions::default())
    }

    pub fn with_options(lexicon: Lexicon, options: SearchOptions) -> Self {
        Self {
            lexicon,
            options,
            index: OnceLock::new(),
            tables: Mutex::new(HashMap::new()),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn catalog(&self) -> &[VerbEntry] {
        self.lexicon.verbs()
    }

    pub fn irregulars(&self) -> &Irregulars {
        self.lexicon.irregulars()
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Conjugation table for `verb`, computed once and then cached.
    pub fn conjugate(&self, verb: &str) -> Arc<ConjugationTable> {
        let mut tables = self.tables.lock();
        if let Some(table) = tables.get(verb) {
            return Arc::clone(table);
        }
        let table = Arc::new(conjugate(verb, self.lexicon.irregulars()));
        tables.insert(verb.to_string(), Arc::clone(&table));
        table
    }

    /// The reverse index over the whole catalog, built on first call.
    pub fn index(&self) -> &ReverseIndex {
        self.index
            .get_or_init(|| ReverseIndex::build(self.lexicon.verbs(), self.lexicon.irregulars()))
    }

    /// Whether the reverse index has been built yet.
    pub fn is_indexed(&self) -> bool {
        self.index.get().is_some()
    }

    /// Search the whole catalog.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        resolve_with(query, self.lexicon.verbs(), self.index(), &self.options)
    }

    /// Search a caller-filtered view of the catalog (e.g. favorites). Form
    /// lookup still covers the whole index.
    pub fn search_within<'a, I>(&'a self, query: &str, view: I) -> SearchResults<'a>
    where
        I: IntoIterator<Item = &'a VerbEntry>,
    {
        resolve_with(query, view, self.index(), &self.options)
    }

    /// Swap in a new catalog. The index and every cached table are dropped
    /// together; the next query rebuilds from the new catalog.
    pub fn replace_catalog(&mut self, verbs: Vec<VerbEntry>) {
        let irregulars = self.lexicon.irregulars().clone();
        self.replace_lexicon(Lexicon::from_parts(verbs, irregulars));
    }

    /// Swap in a new lexicon, discarding all derived data.
    pub fn replace_lexicon(&mut self, lexicon: Lexicon) {
        tracing::debug!(
            verbs = lexicon.verbs().len(),
            "lexicon replaced; discarding reverse index"
        );
        self.lexicon = lexicon;
        self.index = OnceLock::new();
        self.tables.get_mut().clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Lexicon::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tense;

    fn small_session() -> Session {
        let verbs = vec![
            VerbEntry::new("falar", "to speak", false),
            VerbEntry::new("comer", "to eat", false),
        ];
        Session::new(Lexicon::from_parts(verbs, Irregulars::new()))
    }

    #[test]
    fn test_index_is_lazy_and_memoized() {
        let session = small_session();
        assert!(!session.is_indexed());
        let first = session.index() as *const ReverseIndex;
        assert!(session.is_indexed());
        let second = session.index() as *const ReverseIndex;
        assert_eq!(first, second);
    }

    #[test]
    fn test_conjugation_is_cached() {
        let session = small_session();
        let a = session.conjugate("falar");
        let b = session.conjugate("falar");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a[Tense::Presente][0], "falo");
    }

    #[test]
    fn test_replace_catalog_rebuilds() {
        let mut session = small_session();
        assert_eq!(session.search("comi").form_matches.len(), 1);
        session.replace_catalog(vec![VerbEntry::new("partir", "to leave", false)]);
        assert!(!session.is_indexed());
        assert!(session.search("comi").form_matches.is_empty());
        assert_eq!(session.search("parti").form_matches[0].verb, "partir");
    }

    #[test]
    fn test_search_within_view() {
        let session = small_session();
        let favorites = ["comer"];
        let view = session
            .catalog()
            .iter()
            .filter(|v| favorites.contains(&v.verb.as_str()));
        let results = session.search_within("", view);
        assert_eq!(results.verb_matches.len(), 1);
        assert_eq!(results.verb_matches[0].verb, "comer");
    }
}
