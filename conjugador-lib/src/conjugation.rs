// Conjugation engine.
//
// Each tense is resolved through two layers, checked in order:
//   1. the exception table (verbatim forms, or an explicit "lacking" mark)
//   2. the regular rules for the verb's class
// A tense that neither layer provides is left out of the table.

use crate::lexicon::{Irregulars, TenseOverride};
use crate::rules::Derivation;
use crate::types::{ConjugationTable, Tense};

/// Produce the full paradigm of `verb`.
///
/// Never fails. A verb whose spelling matches no class and that has no stem
/// override gets only its exception-layer tenses, which may be none.
pub fn conjugate(verb: &str, irregulars: &Irregulars) -> ConjugationTable {
    let derivation = Derivation::of(verb);
    if derivation.is_none() {
        tracing::debug!(verb, "no rule layer; using exception entries only");
    }

    let mut table = ConjugationTable::new();
    for tense in Tense::ALL {
        if let Some(forms) = resolve_tense(verb, tense, derivation.as_ref(), irregulars) {
            table.insert(tense, forms);
        }
    }
    table
}

/// Forms for a single tense, or None if the verb lacks it.
pub fn conjugate_tense(verb: &str, tense: Tense, irregulars: &Irregulars) -> Option<Vec<String>> {
    resolve_tense(verb, tense, Derivation::of(verb).as_ref(), irregulars)
}

/// Rule-layer forms only, ignoring the exception table.
pub fn regular_forms(verb: &str, tense: Tense) -> Option<Vec<String>> {
    Derivation::of(verb)?.forms(tense)
}

fn resolve_tense(
    verb: &str,
    tense: Tense,
    derivation: Option<&Derivation<'_>>,
    irregulars: &Irregulars,
) -> Option<Vec<String>> {
    match irregulars.get(verb, tense) {
        Some(TenseOverride::Forms(forms)) => Some(forms.to_vec()),
        Some(TenseOverride::Lacking) => None,
        None => derivation?.forms(tense),
    }
}
