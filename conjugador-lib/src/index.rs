// Reverse index: normalized surface form -> every (verb, tense, person) that
// produces it.

use indexmap::IndexMap;

use crate::conjugation::conjugate;
use crate::lexicon::Irregulars;
use crate::normalize;
use crate::types::{IndexEntry, Person, VerbEntry};

/// Immutable mapping from normalized form to the entries producing it.
///
/// Keys keep first-insertion order (catalog order, then tense order, then
/// person order) and entries under a key keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReverseIndex {
    entries: IndexMap<String, Vec<IndexEntry>>,
}

impl ReverseIndex {
    /// Conjugate every catalog verb and invert the result.
    pub fn build(catalog: &[VerbEntry], irregulars: &Irregulars) -> Self {
        let mut entries: IndexMap<String, Vec<IndexEntry>> = IndexMap::new();
        let mut total = 0usize;

        for entry in catalog {
            let table = conjugate(&entry.verb, irregulars);
            for (tense, forms) in table.iter() {
                for (i, slot) in forms.iter().enumerate() {
                    let person = if forms.len() == Person::ALL.len() {
                        Person::from_index(i)
                    } else {
                        None
                    };
                    for key in normalize::index_keys(slot) {
                        entries.entry(key.clone()).or_default().push(IndexEntry {
                            verb: entry.verb.clone(),
                            tense,
                            person,
                            form: key,
                        });
                        total += 1;
                    }
                }
            }
        }

        tracing::debug!(
            verbs = catalog.len(),
            keys = entries.len(),
            entries = total,
            "built reverse index"
        );
        Self { entries }
    }

    /// Entries for an already normalized form. Empty if none.
    pub fn lookup(&self, form: &str) -> &[IndexEntry] {
        self.entries.get(form).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Entries of every key starting with `prefix`, concatenated in key order.
    pub fn lookup_prefix(&self, prefix: &str) -> Vec<&IndexEntry> {
        self.entries
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .flat_map(|(_, entries)| entries.iter())
            .collect()
    }

    pub fn contains(&self, form: &str) -> bool {
        self.entries.contains_key(form)
    }

    /// All keys with their entries, in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IndexEntry])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct normalized forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of entries across all keys.
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

/// Build the reverse index for a catalog. See [`ReverseIndex::build`].
pub fn build_index(catalog: &[VerbEntry], irregulars: &Irregulars) -> ReverseIndex {
    ReverseIndex::build(catalog, irregulars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tense;

    fn catalog() -> Vec<VerbEntry> {
        vec![
            VerbEntry::new("falar", "to speak", false),
            VerbEntry::new("fazer", "to do", true),
        ]
    }

    fn irregulars() -> Irregulars {
        let mut irr = Irregulars::new();
        irr.insert(
            "fazer",
            Tense::ImperativoAfirmativo,
            Some(
                ["—", "faz/faze", "faça", "façamos", "fazei", "façam"]
                    .map(String::from)
                    .to_vec(),
            ),
        );
        irr
    }

    #[test]
    fn test_exact_lookup() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        let hits = index.lookup("falo");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].verb, "falar");
        assert_eq!(hits[0].tense, Tense::Presente);
        assert_eq!(hits[0].person, Some(Person::FirstSingular));
    }

    #[test]
    fn test_homographs_accumulate() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        // Presente 3sg and Imperativo Afirmativo 2sg.
        let hits = index.lookup("fala");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].tense, Tense::Presente);
        assert_eq!(hits[1].tense, Tense::ImperativoAfirmativo);
        assert_eq!(hits[1].person, Some(Person::SecondSingular));
    }

    #[test]
    fn test_alternates_are_separate_keys() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        assert!(index.contains("faz"));
        assert!(index.contains("faze"));
        assert!(!index.contains("faz/faze"));
        // Regular Presente 3sg and the imperative alternate share the key.
        let hits = index.lookup("faze");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].tense, Tense::Presente);
        assert_eq!(hits[0].person, Some(Person::ThirdSingular));
        assert!(hits
            .iter()
            .any(|e| e.tense == Tense::ImperativoAfirmativo && e.person == Some(Person::SecondSingular)));
    }

    #[test]
    fn test_placeholder_not_indexed() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        assert!(!index.contains("—"));
        assert!(!index.contains(""));
        assert!(!index.contains("fal"));
    }

    #[test]
    fn test_non_finite_has_no_person() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        let hits = index.lookup("falando");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].tense, Tense::Gerundio);
        assert_eq!(hits[0].person, None);
    }

    #[test]
    fn test_prefix_lookup_in_key_order() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        let forms: Vec<&str> = index
            .lookup_prefix("fal")
            .into_iter()
            .take(3)
            .map(|e| e.form.as_str())
            .collect();
        assert_eq!(forms, vec!["falo", "falas", "fala"]);
        assert!(index.lookup_prefix("zzz").is_empty());
    }

    #[test]
    fn test_missing_key_is_empty() {
        let index = ReverseIndex::build(&catalog(), &irregulars());
        assert!(index.lookup("xyz").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let index = ReverseIndex::build(&[], &Irregulars::new());
        assert!(index.is_empty());
        assert_eq!(index.entry_count(), 0);
    }
}
