// Plain-text rendering of conjugation tables and search results.

use std::fmt::Write;

use crate::types::*;

/// Marker appended to a slot that matches the highlighted form.
const HIGHLIGHT_MARK: &str = "  ◀";

/// Render a verb's paradigm grouped by mood.
///
/// Format:
///   Header:    `fazer — to do [irr.]`
///   Mood:      `Indicativo`
///   Tense:     `  Presente`
///   Personal:  `    eu         faço`
///   Non-finite: `  Gerúndio: fazendo`
///
/// Slots matching `highlight` (alternates split, case-folded) get a marker.
pub fn render_table(
    verb: &str,
    entry: Option<&VerbEntry>,
    table: &ConjugationTable,
    highlight: Option<&str>,
) -> String {
    let hits = highlight.map(|h| table.positions_of(h)).unwrap_or_default();
    let mark = |tense: Tense, i: usize| {
        if hits.contains(&(tense, i)) {
            HIGHLIGHT_MARK
        } else {
            ""
        }
    };

    let mut out = String::new();
    match entry {
        Some(e) if e.irregular => {
            let _ = writeln!(out, "{verb} — {} [irr.]", e.gloss);
        }
        Some(e) => {
            let _ = writeln!(out, "{verb} — {}", e.gloss);
        }
        None => {
            let _ = writeln!(out, "{verb}");
        }
    }

    for mood in Mood::ALL {
        let tenses: Vec<(Tense, &[String])> = mood
            .tenses()
            .filter_map(|t| table.get(t).map(|f| (t, f)))
            .collect();
        if tenses.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", mood.name());
        for (tense, forms) in tenses {
            if tense.is_non_finite() {
                let form = forms.first().map(String::as_str).unwrap_or_default();
                let _ = writeln!(out, "  {tense}: {form}{}", mark(tense, 0));
                continue;
            }
            let _ = writeln!(out, "  {tense}");
            for (i, form) in forms.iter().enumerate() {
                let pronoun = Person::from_index(i).map(Person::pronoun).unwrap_or("");
                let _ = writeln!(out, "    {pronoun:<10} {form}{}", mark(tense, i));
            }
        }
    }

    out
}

/// One line per form match: `falo → falar · Presente · eu`.
pub fn format_form_match(e: &IndexEntry) -> String {
    match e.person {
        Some(p) => format!("{} → {} · {} · {}", e.form, e.verb, e.tense, p.pronoun()),
        None => format!("{} → {} · {}", e.form, e.verb, e.tense),
    }
}

/// Render both halves of a search result. Empty halves are omitted; an empty
/// result renders as an empty string.
pub fn render_results(results: &SearchResults<'_>) -> String {
    let mut out = String::new();
    if !results.verb_matches.is_empty() {
        let _ = writeln!(out, "Verbos ({})", results.verb_matches.len());
        for v in &results.verb_matches {
            let badge = if v.irregular { " [irr.]" } else { "" };
            let _ = writeln!(out, "  {} — {}{badge}", v.verb, v.gloss);
        }
    }
    if !results.form_matches.is_empty() {
        let _ = writeln!(out, "Formas ({})", results.form_matches.len());
        for e in &results.form_matches {
            let _ = writeln!(out, "  {}", format_form_match(e));
        }
    }
    out
}

/// Group verbs by upper-cased initial letter, letters in order, verbs in
/// their original order within a group.
pub fn group_by_initial<'a, I>(verbs: I) -> Vec<(char, Vec<&'a VerbEntry>)>
where
    I: IntoIterator<Item = &'a VerbEntry>,
{
    let mut groups: Vec<(char, Vec<&VerbEntry>)> = Vec::new();
    for v in verbs {
        let Some(initial) = v.verb.chars().next() else {
            continue;
        };
        let letter = initial.to_uppercase().next().unwrap_or(initial);
        match groups.iter_mut().find(|(l, _)| *l == letter) {
            Some((_, members)) => members.push(v),
            None => groups.push((letter, vec![v])),
        }
    }
    groups.sort_by_key(|(letter, _)| *letter);
    groups
}
