use crate::config::ScoringConfig;
use crate::text::{Lexicon, TokenSet, TokenizedText};
use crate::types::{FuzzyEvidence, ItemScore};

use super::scale::{round2, to_five};
use super::similarity::{best_match, fuzzy_ratio, overlap_ratio};

/// Scores duty and profile statements against one tokenized résumé.
///
/// Three signals, weighted by `config.weights`:
/// - overlap: share of item content tokens present verbatim;
/// - fuzzy: per-token credit, exact hit or best word similarity;
/// - verb: presence of action verbs from the lexicon.
pub struct ItemScorer<'a> {
    lexicon: &'a Lexicon,
    config: &'a ScoringConfig,
}

impl<'a> ItemScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self {
            lexicon: &config.lexicon,
            config,
        }
    }

    pub fn score(&self, item: &str, resume: &TokenizedText) -> ItemScore {
        let item_tokens = self.lexicon.analyze(item);
        if item_tokens.content.is_empty() {
            return ItemScore::empty(item);
        }

        let overlap = overlap_ratio(&item_tokens.content, &resume.content);
        let fuzzy = fuzzy_ratio(
            &item_tokens.content,
            &resume.content,
            self.config.fuzzy_early_exit,
        );
        let verb = self.verb_presence(&item_tokens.all, &resume.all);

        let weights = &self.config.weights;
        let raw = (weights.overlap * overlap + weights.fuzzy * fuzzy + weights.verb * verb)
            .clamp(0.0, 1.0);

        let (evidence_exact, evidence_fuzzy) = self.evidence(&item_tokens.content, &resume.content);

        ItemScore {
            item: item.to_string(),
            raw,
            score: to_five(raw),
            overlap,
            fuzzy,
            verb,
            evidence_exact,
            evidence_fuzzy,
        }
    }

    /// Verb signal over full token streams, stopwords included.
    ///
    /// An item naming no verb is credited for verbs anywhere in the résumé,
    /// saturating at `verb_saturation`. An item naming verbs is credited for
    /// the share of them the résumé repeats.
    fn verb_presence(&self, item: &TokenSet, resume: &TokenSet) -> f64 {
        let item_verbs: Vec<&str> = item.iter().filter(|t| self.lexicon.is_verb(t)).collect();

        if item_verbs.is_empty() {
            let found = self
                .lexicon
                .verbs()
                .iter()
                .filter(|verb| resume.contains(verb))
                .count();
            (found as f64 / self.config.verb_saturation as f64).min(1.0)
        } else {
            let found = item_verbs.iter().filter(|verb| resume.contains(verb)).count();
            (found as f64 / item_verbs.len() as f64).min(1.0)
        }
    }

    fn evidence(&self, item: &TokenSet, resume: &TokenSet) -> (Vec<String>, Vec<FuzzyEvidence>) {
        let mut exact: Vec<String> = Vec::new();
        let mut fuzzy = Vec::new();

        for token in item.iter() {
            if resume.contains(token) {
                if !exact.iter().any(|seen| seen == token) {
                    exact.push(token.to_string());
                }
                continue;
            }

            // Always a full scan: evidence must name the true best match.
            if let Some(hit) = best_match(token, resume.iter(), None) {
                if hit.similarity >= self.config.evidence_threshold {
                    fuzzy.push(FuzzyEvidence {
                        item: token.to_string(),
                        matched: hit.candidate.to_string(),
                        similarity: round2(hit.similarity),
                    });
                }
            }
        }

        (exact, fuzzy)
    }
}
