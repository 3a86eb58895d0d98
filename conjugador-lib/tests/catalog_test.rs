// Whole-catalog checks against the embedded lexicon.

use conjugador_lib::conjugation::regular_forms;
use conjugador_lib::lexicon::TenseOverride;
use conjugador_lib::normalize::index_keys;
use conjugador_lib::{build_index, conjugate, Lexicon, Person, Tense};

fn lexicon() -> Lexicon {
    Lexicon::new()
}

#[test]
fn catalog_is_non_empty_and_unique() {
    let lex = lexicon();
    assert!(!lex.verbs().is_empty());
    let mut names: Vec<&str> = lex.verbs().iter().map(|v| v.verb.as_str()).collect();
    names.sort_unstable();
    let before = names.len();
    names.dedup();
    assert_eq!(before, names.len());
}

#[test]
fn every_verb_conjugates_deterministically() {
    let lex = lexicon();
    for entry in lex.verbs() {
        let table = conjugate(&entry.verb, lex.irregulars());
        assert!(!table.is_empty(), "{} has no tenses", entry.verb);
        for (tense, forms) in table.iter() {
            assert_eq!(
                forms.len(),
                tense.slot_count(),
                "{} {tense} has {} slots",
                entry.verb,
                forms.len()
            );
        }
        assert_eq!(table, conjugate(&entry.verb, lex.irregulars()));
    }
}

#[test]
fn every_exception_verb_is_in_catalog() {
    let lex = lexicon();
    for verb in lex.irregulars().verbs() {
        assert!(lex.contains(verb), "{verb} has exceptions but no catalog entry");
    }
}

#[test]
fn verbs_without_exceptions_follow_the_rules() {
    let lex = lexicon();
    for entry in lex.verbs() {
        if lex.irregulars().contains(&entry.verb) {
            continue;
        }
        let table = conjugate(&entry.verb, lex.irregulars());
        assert_eq!(table.len(), Tense::ALL.len(), "{}", entry.verb);
        for tense in Tense::ALL {
            let expected = regular_forms(&entry.verb, tense).unwrap();
            assert_eq!(table[tense], expected[..], "{} {tense}", entry.verb);
        }
    }
}

#[test]
fn exceptions_take_precedence() {
    let lex = lexicon();
    for entry in lex.verbs() {
        let table = conjugate(&entry.verb, lex.irregulars());
        for tense in Tense::ALL {
            match lex.irregulars().get(&entry.verb, tense) {
                Some(TenseOverride::Forms(forms)) => {
                    assert_eq!(table.get(tense), Some(forms), "{} {tense}", entry.verb)
                }
                Some(TenseOverride::Lacking) => {
                    assert!(!table.contains(tense), "{} {tense}", entry.verb)
                }
                None => {
                    let expected = regular_forms(&entry.verb, tense);
                    assert_eq!(table.get(tense), expected.as_deref(), "{} {tense}", entry.verb);
                }
            }
        }
    }
}

#[test]
fn every_slot_is_reachable_from_the_index() {
    let lex = lexicon();
    let index = build_index(lex.verbs(), lex.irregulars());
    for entry in lex.verbs() {
        let table = conjugate(&entry.verb, lex.irregulars());
        for (tense, forms) in table.iter() {
            for (i, slot) in forms.iter().enumerate() {
                let person = if forms.len() == Person::ALL.len() {
                    Person::from_index(i)
                } else {
                    None
                };
                for key in index_keys(slot) {
                    let found = index
                        .lookup(&key)
                        .iter()
                        .any(|e| e.verb == entry.verb && e.tense == tense && e.person == person);
                    assert!(found, "{key} missing for {} {tense} {person:?}", entry.verb);
                }
            }
        }
    }
}

#[test]
fn index_keys_are_normalized() {
    let lex = lexicon();
    let index = build_index(lex.verbs(), lex.irregulars());
    for (key, entries) in index.iter() {
        assert!(!key.is_empty());
        assert!(!key.contains('/'));
        assert!(!key.contains('—'));
        assert_eq!(key, key.trim());
        assert_eq!(key, key.to_lowercase());
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.form == key));
    }
}

#[test]
fn index_build_is_idempotent() {
    let lex = lexicon();
    let a = build_index(lex.verbs(), lex.irregulars());
    let b = build_index(lex.verbs(), lex.irregulars());
    assert_eq!(a.len(), b.len());
    assert_eq!(a.entry_count(), b.entry_count());
    for ((ka, ea), (kb, eb)) in a.iter().zip(b.iter()) {
        assert_eq!(ka, kb);
        assert_eq!(ea, eb);
    }
}
