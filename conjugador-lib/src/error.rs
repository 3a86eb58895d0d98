use thiserror::Error;

/// Errors from loading catalog or exception data supplied at runtime.
///
/// The conjugation, indexing and search operations themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog line {line}: expected 3 tab-separated fields, found {found}")]
    MalformedLine { line: usize, found: usize },

    #[error("catalog line {line}: unknown verb type {kind:?} (expected \"regular\" or \"irregular\")")]
    UnknownVerbType { line: usize, kind: String },

    #[error("catalog line {line}: empty verb identifier")]
    EmptyVerb { line: usize },

    #[error("{verb}: unknown tense {tense:?}")]
    UnknownTense { verb: String, tense: String },

    #[error("{verb}: {tense} has {found} forms, expected {expected}")]
    SlotCount {
        verb: String,
        tense: String,
        found: usize,
        expected: usize,
    },

    #[error("invalid exception table: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
