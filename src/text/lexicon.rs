use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::tokens::{TokenSet, TokenizedText};

const ACCENTS_FROM: &str = "ÁÀÂÄÃáàâäãÉÈÊËéèêëÍÌÎÏíìîïÓÒÔÖÕóòôöõÚÙÛÜúùûüÑñÇç";
const ACCENTS_TO: &str = "AAAAAaaaaaEEEEeeeeIIIIiiiiOOOOOoooooUUUUuuuuNnCc";

const PUNCTUATION: &str = "·/_,:;()”“\"¿?¡!.-–—[]{}<>#*=+\\|@%$^&~`";

const STOPWORDS: &[&str] = &[
    "de", "la", "el", "que", "y", "a", "en", "los", "del", "se", "las", "por", "un", "para",
    "con", "no", "una", "su", "al", "es", "lo", "como", "más", "o", "sus", "pero", "ha", "me",
    "si", "mi", "son", "fue", "este", "ya", "tambien", "sin", "sobre", "entre", "cuando",
    "todo", "nos", "donde", "desde", "tener", "tiene", "todas", "dar", "ser", "esta", "sean",
];

const VERBS: &[&str] = &[
    "coordinar", "liderar", "organizar", "gestionar", "apoyar", "diseñar", "planear",
    "planificar", "capacitar", "formar", "evaluar", "supervisar", "dirigir", "presentar",
    "participar", "elaborar", "desarrollar", "tomar", "identificar", "proponer", "asegurar",
    "preparar", "ejecutar",
];

/// Editable form of a [`Lexicon`].
///
/// Stopwords and verbs may be written with accents or mixed case; they are
/// normalized with the table's own accent and punctuation rules when the
/// lexicon is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconTables {
    pub accents: BTreeMap<char, char>,
    pub punctuation: String,
    pub stopwords: Vec<String>,
    pub verbs: Vec<String>,
}

impl LexiconTables {
    pub fn spanish() -> Self {
        Self {
            accents: ACCENTS_FROM.chars().zip(ACCENTS_TO.chars()).collect(),
            punctuation: PUNCTUATION.to_string(),
            stopwords: STOPWORDS.iter().map(|s| s.to_string()).collect(),
            verbs: VERBS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LexiconTables {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Locale tables driving normalization, stopword filtering and verb detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LexiconTables", into = "LexiconTables")]
pub struct Lexicon {
    accents: BTreeMap<char, char>,
    punctuation: BTreeSet<char>,
    stopwords: BTreeSet<String>,
    // Normalized, deduplicated, in table order.
    verbs: Vec<String>,
}

impl Lexicon {
    pub fn new(tables: LexiconTables) -> Self {
        let mut lexicon = Lexicon {
            accents: tables.accents,
            punctuation: tables.punctuation.chars().collect(),
            stopwords: BTreeSet::new(),
            verbs: Vec::new(),
        };

        let stopwords: BTreeSet<String> = tables
            .stopwords
            .iter()
            .map(|word| lexicon.normalize(word))
            .filter(|word| !word.is_empty())
            .collect();

        let mut verbs: Vec<String> = Vec::with_capacity(tables.verbs.len());
        for verb in &tables.verbs {
            let verb = lexicon.normalize(verb);
            if !verb.is_empty() && !verbs.contains(&verb) {
                verbs.push(verb);
            }
        }

        lexicon.stopwords = stopwords;
        lexicon.verbs = verbs;
        lexicon
    }

    pub fn spanish() -> Self {
        Self::new(LexiconTables::spanish())
    }

    /// Fold accents, blank out punctuation, collapse whitespace and lowercase.
    ///
    /// Punctuation becomes a separator rather than being deleted, so
    /// `"gestión/planeación"` yields two words.
    pub fn normalize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pending_space = false;

        for ch in text.chars() {
            let ch = self.accents.get(&ch).copied().unwrap_or(ch);
            if is_separator(ch) || self.punctuation.contains(&ch) {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.extend(ch.to_lowercase());
        }

        out
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Tokens with stopwords removed, in text order.
    pub fn content_tokens(&self, text: &str) -> TokenSet {
        self.tokenize(text)
            .into_iter()
            .filter(|token| !self.is_stopword(token))
            .collect()
    }

    /// Tokenize once, keeping both the full token stream (verb detection)
    /// and the stopword-free stream (matching).
    pub fn analyze(&self, text: &str) -> TokenizedText {
        let all = self.tokenize(text);
        let content = all
            .iter()
            .filter(|token| !self.is_stopword(token))
            .cloned()
            .collect();

        TokenizedText {
            all: TokenSet::new(all),
            content,
        }
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    pub fn is_verb(&self, token: &str) -> bool {
        self.verbs.iter().any(|verb| verb == token)
    }

    pub fn verbs(&self) -> &[String] {
        &self.verbs
    }

    pub fn stopwords(&self) -> impl Iterator<Item = &str> {
        self.stopwords.iter().map(String::as_str)
    }
}

// A leading byte-order mark is common in text read from files.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::spanish()
    }
}

impl From<LexiconTables> for Lexicon {
    fn from(tables: LexiconTables) -> Self {
        Lexicon::new(tables)
    }
}

impl From<Lexicon> for LexiconTables {
    fn from(lexicon: Lexicon) -> Self {
        LexiconTables {
            accents: lexicon.accents,
            punctuation: lexicon.punctuation.into_iter().collect(),
            stopwords: lexicon.stopwords.into_iter().collect(),
            verbs: lexicon.verbs,
        }
    }
}
