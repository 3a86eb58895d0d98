// Regular conjugation rules: the three verb classes and their suffix tables,
// plus the explicit record for the one verb whose spelling fits no class.

use serde::{Deserialize, Serialize};

use crate::normalize::UNUSED_SLOT;
use crate::types::Tense;

/// Regular verb class, determined by the infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

// Suffixes per tense, one per person (or a single one for non-finite tenses).
// Futures include the class ending; see `Derivation::forms`.
const AR_ENDINGS: &[(Tense, &[&str])] = &[
    (Tense::Presente, &["o", "as", "a", "amos", "ais", "am"]),
    (Tense::PreteritoPerfeito, &["ei", "aste", "ou", "ámos", "astes", "aram"]),
    (Tense::PreteritoImperfeito, &["ava", "avas", "ava", "ávamos", "áveis", "avam"]),
    (Tense::PreteritoMaisQuePerfeito, &["ara", "aras", "ara", "áramos", "áreis", "aram"]),
    (Tense::FuturoDoPresente, &["arei", "arás", "ará", "aremos", "areis", "arão"]),
    (Tense::FuturoDoPreterito, &["aria", "arias", "aria", "aríamos", "aríeis", "ariam"]),
    (Tense::PresenteDoSubjuntivo, &["e", "es", "e", "emos", "eis", "em"]),
    (Tense::PreteritoImperfeitoDoSubjuntivo, &["asse", "asses", "asse", "ássemos", "ásseis", "assem"]),
    (Tense::FuturoDoSubjuntivo, &["ar", "ares", "ar", "armos", "ardes", "arem"]),
    (Tense::ImperativoAfirmativo, &["—", "a", "e", "emos", "ai", "em"]),
    (Tense::ImperativoNegativo, &["—", "es", "e", "emos", "eis", "em"]),
    (Tense::InfinitivoPessoal, &["ar", "ares", "ar", "armos", "ardes", "arem"]),
    (Tense::Gerundio, &["ando"]),
    (Tense::Participio, &["ado"]),
];

const ER_ENDINGS: &[(Tense, &[&str])] = &[
    (Tense::Presente, &["o", "es", "e", "emos", "eis", "em"]),
    (Tense::PreteritoPerfeito, &["i", "este", "eu", "emos", "estes", "eram"]),
    (Tense::PreteritoImperfeito, &["ia", "ias", "ia", "íamos", "íeis", "iam"]),
    (Tense::PreteritoMaisQuePerfeito, &["era", "eras", "era", "êramos", "êreis", "eram"]),
    (Tense::FuturoDoPresente, &["erei", "erás", "erá", "eremos", "ereis", "erão"]),
    (Tense::FuturoDoPreterito, &["eria", "erias", "eria", "eríamos", "eríeis", "eriam"]),
    (Tense::PresenteDoSubjuntivo, &["a", "as", "a", "amos", "ais", "am"]),
    (Tense::PreteritoImperfeitoDoSubjuntivo, &["esse", "esses", "esse", "êssemos", "êsseis", "essem"]),
    (Tense::FuturoDoSubjuntivo, &["er", "eres", "er", "ermos", "erdes", "erem"]),
    (Tense::ImperativoAfirmativo, &["—", "e", "a", "amos", "ei", "am"]),
    (Tense::ImperativoNegativo, &["—", "as", "a", "amos", "ais", "am"]),
    (Tense::InfinitivoPessoal, &["er", "eres", "er", "ermos", "erdes", "erem"]),
    (Tense::Gerundio, &["endo"]),
    (Tense::Participio, &["ido"]),
];

const IR_ENDINGS: &[(Tense, &[&str])] = &[
    (Tense::Presente, &["o", "es", "e", "imos", "is", "em"]),
    (Tense::PreteritoPerfeito, &["i", "iste", "iu", "imos", "istes", "iram"]),
    (Tense::PreteritoImperfeito, &["ia", "ias", "ia", "íamos", "íeis", "iam"]),
    (Tense::PreteritoMaisQuePerfeito, &["ira", "iras", "ira", "íramos", "íreis", "iram"]),
    (Tense::FuturoDoPresente, &["irei", "irás", "irá", "iremos", "ireis", "irão"]),
    (Tense::FuturoDoPreterito, &["iria", "irias", "iria", "iríamos", "iríeis", "iriam"]),
    (Tense::PresenteDoSubjuntivo, &["a", "as", "a", "amos", "ais", "am"]),
    (Tense::PreteritoImperfeitoDoSubjuntivo, &["isse", "isses", "isse", "íssemos", "ísseis", "issem"]),
    (Tense::FuturoDoSubjuntivo, &["ir", "ires", "ir", "irmos", "irdes", "irem"]),
    (Tense::ImperativoAfirmativo, &["—", "e", "a", "amos", "i", "am"]),
    (Tense::ImperativoNegativo, &["—", "as", "a", "amos", "ais", "am"]),
    (Tense::InfinitivoPessoal, &["ir", "ires", "ir", "irmos", "irdes", "irem"]),
    (Tense::Gerundio, &["indo"]),
    (Tense::Participio, &["ido"]),
];

impl VerbClass {
    pub const ALL: [VerbClass; 3] = [VerbClass::Ar, VerbClass::Er, VerbClass::Ir];

    /// Infinitive ending that identifies the class.
    pub fn ending(self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
        }
    }

    /// Class whose ending matches the identifier's suffix, if any. Does not
    /// consult the override table.
    pub fn of(verb: &str) -> Option<VerbClass> {
        VerbClass::ALL
            .into_iter()
            .find(|c| verb.ends_with(c.ending()))
    }

    /// Suffixes for a tense, in person order. None if the class defines none.
    pub fn suffixes(self, tense: Tense) -> Option<&'static [&'static str]> {
        let table = match self {
            VerbClass::Ar => AR_ENDINGS,
            VerbClass::Er => ER_ENDINGS,
            VerbClass::Ir => IR_ENDINGS,
        };
        table
            .iter()
            .find(|(t, _)| *t == tense)
            .map(|(_, suffixes)| *suffixes)
    }
}

/// Explicit class and stems for a verb whose infinitive fits no class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemOverride {
    pub verb: &'static str,
    pub class: VerbClass,
    pub stem: &'static str,
    /// Plays the role of the infinitive in the future tenses.
    pub future_base: &'static str,
}

pub const STEM_OVERRIDES: &[StemOverride] = &[StemOverride {
    verb: "pôr",
    class: VerbClass::Er,
    stem: "p",
    future_base: "por",
}];

pub fn stem_override(verb: &str) -> Option<&'static StemOverride> {
    STEM_OVERRIDES.iter().find(|o| o.verb == verb)
}

/// Resolved rule inputs for one verb: class, stem and future base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation<'a> {
    pub class: VerbClass,
    pub stem: &'a str,
    pub future_base: &'a str,
}

impl<'a> Derivation<'a> {
    /// Consult the override table first, then the spelling. None when the
    /// verb has no rule layer.
    pub fn of(verb: &'a str) -> Option<Derivation<'a>> {
        if let Some(o) = stem_override(verb) {
            return Some(Derivation {
                class: o.class,
                stem: o.stem,
                future_base: o.future_base,
            });
        }
        let class = VerbClass::of(verb)?;
        Some(Derivation {
            class,
            stem: &verb[..verb.len() - class.ending().len()],
            future_base: verb,
        })
    }

    /// Rule-derived forms for a tense, or None if the class has no suffixes
    /// for it.
    pub fn forms(&self, tense: Tense) -> Option<Vec<String>> {
        let suffixes = self.class.suffixes(tense)?;
        let forms = if tense.uses_future_base() {
            suffixes.iter().map(|s| self.future_form(s)).collect()
        } else {
            suffixes.iter().map(|s| self.stem_form(s)).collect()
        };
        Some(forms)
    }

    fn stem_form(&self, suffix: &str) -> String {
        // The unused imperative slot stays a bare placeholder.
        if suffix.starts_with(UNUSED_SLOT) {
            return suffix.to_string();
        }
        format!("{}{suffix}", self.stem)
    }

    /// Future base + suffix with the class ending removed ("falar" + "ei").
    fn future_form(&self, suffix: &str) -> String {
        let tail = suffix
            .strip_prefix(self.class.ending())
            .unwrap_or(suffix);
        format!("{}{tail}", self.future_base)
    }
}
