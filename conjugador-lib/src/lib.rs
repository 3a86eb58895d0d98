pub mod types;
pub mod error;
pub mod normalize;
pub mod rules;
pub mod lexicon;
pub mod conjugation;
pub mod index;
pub mod search;
pub mod session;
pub mod output;

pub use conjugation::conjugate;
pub use error::{Error, Result};
pub use index::{build_index, ReverseIndex};
pub use lexicon::{Irregulars, Lexicon};
pub use search::{resolve, resolve_with, SearchOptions};
pub use session::Session;
pub use types::{ConjugationTable, IndexEntry, Mood, Person, SearchResults, Tense, VerbEntry};
