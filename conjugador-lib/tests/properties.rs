use conjugador_lib::conjugation::regular_forms;
use conjugador_lib::lexicon::Irregulars;
use conjugador_lib::rules::VerbClass;
use conjugador_lib::{build_index, conjugate, resolve, Lexicon, Tense, VerbEntry};
use proptest::prelude::*;

fn class() -> impl Strategy<Value = VerbClass> {
    prop_oneof![
        Just(VerbClass::Ar),
        Just(VerbClass::Er),
        Just(VerbClass::Ir),
    ]
}

fn tense() -> impl Strategy<Value = Tense> {
    proptest::sample::select(Tense::ALL.to_vec())
}

proptest! {
    #[test]
    fn regular_forms_are_stem_plus_suffix(stem in "[b-df-hj-np-tv-z][a-z]{1,6}", class in class(), tense in tense()) {
        let verb = format!("{stem}{}", class.ending());
        prop_assume!(VerbClass::of(&verb) == Some(class));

        let forms = regular_forms(&verb, tense).unwrap();
        let suffixes = class.suffixes(tense).unwrap();
        prop_assert_eq!(forms.len(), suffixes.len());
        for (form, suffix) in forms.iter().zip(suffixes) {
            if suffix.starts_with('—') {
                prop_assert_eq!(form.as_str(), *suffix);
            } else if tense.uses_future_base() {
                prop_assert!(form.starts_with(&verb), "{} {}", form, verb);
            } else {
                prop_assert_eq!(form, &format!("{stem}{suffix}"));
            }
        }
    }

    #[test]
    fn regular_class_verbs_have_all_tenses(stem in "[a-z]{2,8}", class in class()) {
        let verb = format!("{stem}{}", class.ending());
        let table = conjugate(&verb, &Irregulars::new());
        prop_assert_eq!(table.len(), Tense::ALL.len());
    }

    #[test]
    fn own_forms_are_found_by_search(i in 0usize..1000, tense in tense()) {
        let lex = Lexicon::new();
        let verbs = lex.verbs();
        let entry: &VerbEntry = &verbs[i % verbs.len()];
        let table = conjugate(&entry.verb, lex.irregulars());
        prop_assume!(table.contains(tense));

        let one = std::slice::from_ref(entry);
        let index = build_index(one, lex.irregulars());
        for slot in &table[tense] {
            for key in conjugador_lib::normalize::index_keys(slot) {
                // The bare infinitive is reported as a verb match instead.
                if key == entry.verb {
                    continue;
                }
                let results = resolve(&key, one, &index);
                prop_assert!(
                    results.form_matches.iter().any(|e| e.verb == entry.verb && e.tense == tense),
                    "{} not found for {} {}", key, entry.verb, tense
                );
            }
        }
    }
}
