pub mod lexicon;
pub mod tokens;

use crate::config::DEFAULT_CONFIG;

pub use lexicon::{Lexicon, LexiconTables};
pub use tokens::{TokenSet, TokenizedText};

/// Normalize with the default Spanish tables.
///
/// Empty input yields an empty string.
pub fn normalize(text: &str) -> String {
    DEFAULT_CONFIG.lexicon.normalize(text)
}

/// Tokenize with the default Spanish tables. Stopwords are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_CONFIG.lexicon.tokenize(text)
}
