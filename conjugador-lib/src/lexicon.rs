use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{Error, Result};
use crate::types::{EmbeddedData, Tense, VerbEntry};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.json"));

/// What the exception table says about one verb and tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenseOverride<'a> {
    /// Use these forms verbatim.
    Forms(&'a [String]),
    /// The verb has no such tense (e.g. the imperative of {poder}).
    Lacking,
}

/// Per-verb, per-tense replacements for the rule-derived forms.
#[derive(Debug, Clone, Default)]
pub struct Irregulars {
    verbs: HashMap<String, BTreeMap<Tense, Option<Vec<String>>>>,
}

impl Irregulars {
    /// An empty table: every verb falls back to the rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an exception table from JSON of the shape
    /// `{"verb": {"Tense name": ["f1", ...] | null}}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: BTreeMap<String, BTreeMap<String, Option<Vec<String>>>> =
            serde_json::from_str(text)?;
        let mut table = Self::new();
        for (verb, tenses) in raw {
            for (name, forms) in tenses {
                let tense = Tense::from_name(&name).ok_or_else(|| Error::UnknownTense {
                    verb: verb.clone(),
                    tense: name.clone(),
                })?;
                if let Some(forms) = &forms {
                    if forms.len() != tense.slot_count() {
                        return Err(Error::SlotCount {
                            verb,
                            tense: name,
                            found: forms.len(),
                            expected: tense.slot_count(),
                        });
                    }
                }
                table.insert(&verb, tense, forms);
            }
        }
        Ok(table)
    }

    /// Set the override for one tense. `None` marks the tense as lacking.
    pub fn insert(&mut self, verb: &str, tense: Tense, forms: Option<Vec<String>>) {
        self.verbs
            .entry(verb.to_string())
            .or_default()
            .insert(tense, forms);
    }

    pub fn get(&self, verb: &str, tense: Tense) -> Option<TenseOverride<'_>> {
        let entry = self.verbs.get(verb)?.get(&tense)?;
        Some(match entry {
            Some(forms) => TenseOverride::Forms(forms),
            None => TenseOverride::Lacking,
        })
    }

    /// Whether the verb has any exception entry.
    pub fn contains(&self, verb: &str) -> bool {
        self.verbs.contains_key(verb)
    }

    /// Verbs with exception entries, in no particular order.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.verbs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
}

/// The verb catalog together with its exception table. Immutable once built.
#[derive(Debug, Clone)]
pub struct Lexicon {
    verbs: Vec<VerbEntry>,
    by_name: HashMap<String, usize>,
    irregulars: Irregulars,
}

impl Lexicon {
    /// Load the catalog and exception table embedded at compile time.
    pub fn new() -> Self {
        let data: EmbeddedData =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded lexicon JSON is invalid");

        let mut irregulars = Irregulars::new();
        for (verb, tenses) in data.irregulars {
            for (tense, forms) in tenses {
                irregulars.insert(&verb, tense, forms);
            }
        }

        Self::from_parts(data.verbs, irregulars)
    }

    /// Build from an already validated catalog. Identifiers are assumed
    /// unique; on duplicates, lookups see the first entry.
    pub fn from_parts(verbs: Vec<VerbEntry>, irregulars: Irregulars) -> Self {
        let mut by_name = HashMap::with_capacity(verbs.len());
        for (i, entry) in verbs.iter().enumerate() {
            by_name.entry(entry.verb.clone()).or_insert(i);
        }
        Self {
            verbs,
            by_name,
            irregulars,
        }
    }

    /// Replace the catalog, keeping the exception table.
    pub fn with_verbs(self, verbs: Vec<VerbEntry>) -> Self {
        Self::from_parts(verbs, self.irregulars)
    }

    /// Replace the exception table, keeping the catalog.
    pub fn with_irregulars(self, irregulars: Irregulars) -> Self {
        Self::from_parts(self.verbs, irregulars)
    }

    /// All catalog entries in catalog order.
    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    pub fn lookup(&self, verb: &str) -> Option<&VerbEntry> {
        self.by_name.get(verb).map(|&i| &self.verbs[i])
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.by_name.contains_key(verb)
    }

    pub fn irregulars(&self) -> &Irregulars {
        &self.irregulars
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a catalog in `verb<TAB>gloss<TAB>regular|irregular` form. Blank
/// lines and lines starting with `#` are skipped. Duplicates are kept; see
/// [`dedup_catalog`].
pub fn parse_catalog(text: &str) -> Result<Vec<VerbEntry>> {
    let mut verbs = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(Error::MalformedLine {
                line: line_no,
                found: fields.len(),
            });
        }
        let verb = fields[0].trim();
        if verb.is_empty() {
            return Err(Error::EmptyVerb { line: line_no });
        }
        let irregular = match fields[2].trim() {
            "regular" => false,
            "irregular" => true,
            other => {
                return Err(Error::UnknownVerbType {
                    line: line_no,
                    kind: other.to_string(),
                })
            }
        };
        verbs.push(VerbEntry::new(verb, fields[1].trim(), irregular));
    }
    Ok(verbs)
}

/// Drop later entries whose identifier was already seen.
pub fn dedup_catalog(verbs: Vec<VerbEntry>) -> Vec<VerbEntry> {
    let mut seen = HashSet::new();
    verbs
        .into_iter()
        .filter(|v| seen.insert(v.verb.clone()))
        .collect()
}
