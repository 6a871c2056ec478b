use std::collections::HashSet;

/// Ordered tokens with a membership index.
///
/// Order only matters for evidence; lookups go through the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<String>,
    index: HashSet<String>,
}

impl TokenSet {
    pub fn new(tokens: Vec<String>) -> Self {
        let index = tokens.iter().cloned().collect();
        Self { tokens, index }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        TokenSet::new(iter.into_iter().collect())
    }
}

/// A text tokenized once for every scorer that needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizedText {
    /// Every token, stopwords included.
    pub all: TokenSet,
    /// Tokens with stopwords removed.
    pub content: TokenSet,
}
