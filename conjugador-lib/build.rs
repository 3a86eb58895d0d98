// Validates the verb catalog and exception table and embeds them as JSON at
// compile time.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct EmbeddedData {
    verbs: Vec<VerbRaw>,
    irregulars: BTreeMap<String, BTreeMap<String, Option<Vec<String>>>>,
}

#[derive(Serialize)]
struct VerbRaw {
    verb: String,
    gloss: String,
    irregular: bool,
}

#[derive(Deserialize)]
#[serde(transparent)]
struct IrregularsRaw(BTreeMap<String, BTreeMap<String, Option<Vec<String>>>>);

// Tense names and their slot counts. Must stay in sync with `Tense` in
// src/types.rs.
const TENSES: &[(&str, usize)] = &[
    ("Presente", 6),
    ("Pretérito Perfeito", 6),
    ("Pretérito Imperfeito", 6),
    ("Pretérito Mais-que-perfeito", 6),
    ("Futuro do Presente", 6),
    ("Futuro do Pretérito", 6),
    ("Presente do Subjuntivo", 6),
    ("Pretérito Imperfeito do Subjuntivo", 6),
    ("Futuro do Subjuntivo", 6),
    ("Imperativo Afirmativo", 6),
    ("Imperativo Negativo", 6),
    ("Infinitivo Pessoal", 6),
    ("Gerúndio", 1),
    ("Particípio", 1),
];

fn main() {
    let data_dir = Path::new("../data");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("lexicon.json");

    let catalog_path = data_dir.join("verbos.tsv");
    let irregulars_path = data_dir.join("irregulares.json");
    println!("cargo:rerun-if-changed={}", catalog_path.display());
    println!("cargo:rerun-if-changed={}", irregulars_path.display());

    let catalog = fs::read_to_string(&catalog_path).expect("cannot read data/verbos.tsv");
    let verbs = parse_catalog(&catalog);

    let raw = fs::read_to_string(&irregulars_path).expect("cannot read data/irregulares.json");
    let IrregularsRaw(irregulars) =
        serde_json::from_str(&raw).expect("data/irregulares.json is not valid JSON");
    validate_irregulars(&irregulars);

    let data = EmbeddedData { verbs, irregulars };
    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write lexicon.json");

    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse `verb<TAB>gloss<TAB>regular|irregular` lines. Comment lines start
/// with `#`. Later duplicates of an identifier are dropped.
fn parse_catalog(text: &str) -> Vec<VerbRaw> {
    let mut seen = HashSet::new();
    let mut verbs = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            panic!(
                "data/verbos.tsv:{}: expected 3 tab-separated fields, found {}",
                i + 1,
                fields.len()
            );
        }
        let irregular = match fields[2].trim() {
            "regular" => false,
            "irregular" => true,
            other => panic!("data/verbos.tsv:{}: unknown verb type {other:?}", i + 1),
        };
        let verb = fields[0].trim().to_string();
        if !seen.insert(verb.clone()) {
            println!("cargo:warning=duplicate catalog verb {verb:?} dropped");
            continue;
        }
        verbs.push(VerbRaw {
            verb,
            gloss: fields[1].trim().to_string(),
            irregular,
        });
    }

    verbs
}

fn validate_irregulars(irregulars: &BTreeMap<String, BTreeMap<String, Option<Vec<String>>>>) {
    for (verb, tenses) in irregulars {
        for (tense, forms) in tenses {
            let slots = TENSES
                .iter()
                .find(|(name, _)| name == tense)
                .map(|(_, slots)| *slots)
                .unwrap_or_else(|| panic!("{verb}: unknown tense {tense:?}"));
            if let Some(forms) = forms {
                if forms.len() != slots {
                    panic!(
                        "{verb}: {tense} has {} forms, expected {slots}",
                        forms.len()
                    );
                }
            }
        }
    }
}
