use std::collections::BTreeMap;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::normalize;

/// One of the 14 tenses, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tense {
    #[serde(rename = "Presente")]
    Presente,
    #[serde(rename = "Pretérito Perfeito")]
    PreteritoPerfeito,
    #[serde(rename = "Pretérito Imperfeito")]
    PreteritoImperfeito,
    #[serde(rename = "Pretérito Mais-que-perfeito")]
    PreteritoMaisQuePerfeito,
    #[serde(rename = "Futuro do Presente")]
    FuturoDoPresente,
    #[serde(rename = "Futuro do Pretérito")]
    FuturoDoPreterito,
    #[serde(rename = "Presente do Subjuntivo")]
    PresenteDoSubjuntivo,
    #[serde(rename = "Pretérito Imperfeito do Subjuntivo")]
    PreteritoImperfeitoDoSubjuntivo,
    #[serde(rename = "Futuro do Subjuntivo")]
    FuturoDoSubjuntivo,
    #[serde(rename = "Imperativo Afirmativo")]
    ImperativoAfirmativo,
    #[serde(rename = "Imperativo Negativo")]
    ImperativoNegativo,
    #[serde(rename = "Infinitivo Pessoal")]
    InfinitivoPessoal,
    #[serde(rename = "Gerúndio")]
    Gerundio,
    #[serde(rename = "Particípio")]
    Participio,
}

impl Tense {
    pub const ALL: [Tense; 14] = [
        Tense::Presente,
        Tense::PreteritoPerfeito,
        Tense::PreteritoImperfeito,
        Tense::PreteritoMaisQuePerfeito,
        Tense::FuturoDoPresente,
        Tense::FuturoDoPreterito,
        Tense::PresenteDoSubjuntivo,
        Tense::PreteritoImperfeitoDoSubjuntivo,
        Tense::FuturoDoSubjuntivo,
        Tense::ImperativoAfirmativo,
        Tense::ImperativoNegativo,
        Tense::InfinitivoPessoal,
        Tense::Gerundio,
        Tense::Participio,
    ];

    /// Display name, as used in the data files.
    pub fn name(self) -> &'static str {
        match self {
            Tense::Presente => "Presente",
            Tense::PreteritoPerfeito => "Pretérito Perfeito",
            Tense::PreteritoImperfeito => "Pretérito Imperfeito",
            Tense::PreteritoMaisQuePerfeito => "Pretérito Mais-que-perfeito",
            Tense::FuturoDoPresente => "Futuro do Presente",
            Tense::FuturoDoPreterito => "Futuro do Pretérito",
            Tense::PresenteDoSubjuntivo => "Presente do Subjuntivo",
            Tense::PreteritoImperfeitoDoSubjuntivo => "Pretérito Imperfeito do Subjuntivo",
            Tense::FuturoDoSubjuntivo => "Futuro do Subjuntivo",
            Tense::ImperativoAfirmativo => "Imperativo Afirmativo",
            Tense::ImperativoNegativo => "Imperativo Negativo",
            Tense::InfinitivoPessoal => "Infinitivo Pessoal",
            Tense::Gerundio => "Gerúndio",
            Tense::Participio => "Particípio",
        }
    }

    /// Look up a tense by display name. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Tense> {
        let wanted = name.trim().to_lowercase();
        Tense::ALL
            .into_iter()
            .find(|t| t.name().to_lowercase() == wanted)
    }

    pub fn mood(self) -> Mood {
        match self {
            Tense::Presente
            | Tense::PreteritoPerfeito
            | Tense::PreteritoImperfeito
            | Tense::PreteritoMaisQuePerfeito
            | Tense::FuturoDoPresente
            | Tense::FuturoDoPreterito => Mood::Indicativo,
            Tense::PresenteDoSubjuntivo
            | Tense::PreteritoImperfeitoDoSubjuntivo
            | Tense::FuturoDoSubjuntivo => Mood::Subjuntivo,
            Tense::ImperativoAfirmativo | Tense::ImperativoNegativo => Mood::Imperativo,
            Tense::InfinitivoPessoal | Tense::Gerundio | Tense::Participio => {
                Mood::FormasNominais
            }
        }
    }

    /// Gerund and participle: a single form with no grammatical person.
    pub fn is_non_finite(self) -> bool {
        matches!(self, Tense::Gerundio | Tense::Participio)
    }

    /// Number of forms a table holds for this tense (6 or 1).
    pub fn slot_count(self) -> usize {
        if self.is_non_finite() {
            1
        } else {
            Person::ALL.len()
        }
    }

    /// True for the two futures, which are built on the infinitive rather
    /// than the stem.
    pub fn uses_future_base(self) -> bool {
        matches!(self, Tense::FuturoDoPresente | Tense::FuturoDoPreterito)
    }
}

impl std::fmt::Display for Tense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mood grouping of tenses. Presentational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Indicativo,
    Subjuntivo,
    Imperativo,
    #[serde(rename = "Formas Nominais")]
    FormasNominais,
}

impl Mood {
    pub const ALL: [Mood; 4] = [
        Mood::Indicativo,
        Mood::Subjuntivo,
        Mood::Imperativo,
        Mood::FormasNominais,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Indicativo => "Indicativo",
            Mood::Subjuntivo => "Subjuntivo",
            Mood::Imperativo => "Imperativo",
            Mood::FormasNominais => "Formas Nominais",
        }
    }

    /// Tenses of this mood, in presentation order.
    pub fn tenses(self) -> impl Iterator<Item = Tense> {
        Tense::ALL.into_iter().filter(move |t| t.mood() == self)
    }
}

/// Grammatical person; orders the six forms of a personal tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Person> {
        Person::ALL.get(i).copied()
    }

    /// Subject pronoun label shown next to the form.
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::FirstSingular => "eu",
            Person::SecondSingular => "tu",
            Person::ThirdSingular => "ele/ela",
            Person::FirstPlural => "nós",
            Person::SecondPlural => "vós",
            Person::ThirdPlural => "eles/elas",
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbEntry {
    /// Infinitive; unique within a catalog.
    pub verb: String,
    /// English gloss (e.g., "to speak").
    pub gloss: String,
    #[serde(default)]
    pub irregular: bool,
}

impl VerbEntry {
    pub fn new(verb: impl Into<String>, gloss: impl Into<String>, irregular: bool) -> Self {
        Self {
            verb: verb.into(),
            gloss: gloss.into(),
            irregular,
        }
    }
}

/// Full paradigm of one verb. Tenses the verb lacks are absent, never empty.
///
/// A slot may hold alternate spellings (e.g. "faz/faze"); they stay joined
/// until a caller splits them with [`normalize::alternates`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConjugationTable {
    forms: BTreeMap<Tense, Vec<String>>,
}

impl ConjugationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, tense: Tense, forms: Vec<String>) {
        self.forms.insert(tense, forms);
    }

    pub fn get(&self, tense: Tense) -> Option<&[String]> {
        self.forms.get(&tense).map(|v| v.as_slice())
    }

    pub fn contains(&self, tense: Tense) -> bool {
        self.forms.contains_key(&tense)
    }

    /// Tenses with their forms, in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (Tense, &[String])> {
        self.forms.iter().map(|(t, f)| (*t, f.as_slice()))
    }

    pub fn tenses(&self) -> impl Iterator<Item = Tense> + '_ {
        self.forms.keys().copied()
    }

    /// Number of tenses present.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Every (tense, slot index) whose slot, split on alternates and
    /// case-folded, equals `form` after query normalization.
    pub fn positions_of(&self, form: &str) -> Vec<(Tense, usize)> {
        let wanted = normalize::normalize_query(form);
        if wanted.is_empty() {
            return vec![];
        }
        let mut hits = Vec::new();
        for (tense, forms) in self.iter() {
            for (i, slot) in forms.iter().enumerate() {
                if normalize::index_keys(slot).iter().any(|k| *k == wanted) {
                    hits.push((tense, i));
                }
            }
        }
        hits
    }
}

impl Index<Tense> for ConjugationTable {
    type Output = [String];

    /// Panics if the tense is absent; use [`ConjugationTable::get`] otherwise.
    fn index(&self, tense: Tense) -> &[String] {
        match self.get(tense) {
            Some(forms) => forms,
            None => panic!("tense {tense} is absent from this table"),
        }
    }
}

/// One inflected form pointing back at the verb, tense and person that
/// produce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexEntry {
    pub verb: String,
    pub tense: Tense,
    /// None for non-finite tenses.
    pub person: Option<Person>,
    /// Normalized surface form (the index key).
    pub form: String,
}

/// Outcome of a unified search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub verb_matches: Vec<&'a VerbEntry>,
    pub form_matches: Vec<&'a IndexEntry>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.verb_matches.is_empty() && self.form_matches.is_empty()
    }
}

/// Raw embedded data from build.rs.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EmbeddedData {
    pub verbs: Vec<VerbEntry>,
    pub irregulars: BTreeMap<String, BTreeMap<Tense, Option<Vec<String>>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tense_names_round_trip() {
        for tense in Tense::ALL {
            assert_eq!(Tense::from_name(tense.name()), Some(tense));
        }
        assert_eq!(Tense::from_name("gerúndio"), Some(Tense::Gerundio));
        assert_eq!(Tense::from_name("Aoristo"), None);
    }

    #[test]
    fn test_moods_partition_tenses() {
        let grouped: Vec<Tense> = Mood::ALL.into_iter().flat_map(|m| m.tenses()).collect();
        assert_eq!(grouped, Tense::ALL.to_vec());
        assert_eq!(Mood::Imperativo.tenses().count(), 2);
    }

    #[test]
    fn test_slot_counts() {
        assert_eq!(Tense::Presente.slot_count(), 6);
        assert_eq!(Tense::InfinitivoPessoal.slot_count(), 6);
        assert_eq!(Tense::Gerundio.slot_count(), 1);
        assert_eq!(Tense::Participio.slot_count(), 1);
    }

    #[test]
    fn test_person_order() {
        for (i, p) in Person::ALL.into_iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Person::from_index(i), Some(p));
        }
        assert_eq!(Person::from_index(6), None);
        assert_eq!(Person::ThirdPlural.pronoun(), "eles/elas");
    }

    #[test]
    fn test_tense_serializes_as_display_name() {
        let json = serde_json::to_string(&Tense::PreteritoMaisQuePerfeito).unwrap();
        assert_eq!(json, "\"Pretérito Mais-que-perfeito\"");
    }

    #[test]
    fn test_positions_of_splits_alternates() {
        let mut table = ConjugationTable::new();
        table.insert(
            Tense::ImperativoAfirmativo,
            ["—", "faz/faze", "faça", "façamos", "fazei", "façam"]
                .map(String::from)
                .to_vec(),
        );
        table.insert(
            Tense::Presente,
            ["faço", "fazes", "faz", "fazemos", "fazeis", "fazem"]
                .map(String::from)
                .to_vec(),
        );
        assert_eq!(
            table.positions_of(" FAZE "),
            vec![(Tense::ImperativoAfirmativo, 1)]
        );
        assert_eq!(
            table.positions_of("faz"),
            vec![(Tense::Presente, 2), (Tense::ImperativoAfirmativo, 1)]
        );
        assert!(table.positions_of("—").is_empty());
    }
}
