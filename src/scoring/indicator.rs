use crate::config::ScoringConfig;
use crate::text::{Lexicon, TokenizedText};
use crate::types::IndicatorScore;

use super::scale::to_five;
use super::similarity::best_match;

/// Matches an indicator's keyword phrases against the résumé.
///
/// A phrase is matched when any one of its words is a résumé content token,
/// or failing that when the whole phrase is within `indicator_threshold`
/// similarity of some résumé token.
pub struct IndicatorScorer<'a> {
    lexicon: &'a Lexicon,
    config: &'a ScoringConfig,
}

impl<'a> IndicatorScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self {
            lexicon: &config.lexicon,
            config,
        }
    }

    pub fn score(&self, name: &str, keywords: &[String], resume: &TokenizedText) -> IndicatorScore {
        if keywords.is_empty() {
            // Nothing asked, nothing missing.
            return IndicatorScore {
                name: name.to_string(),
                score: 5.0,
                ratio: 1.0,
                matches: Vec::new(),
            };
        }

        let mut hits = 0usize;
        let mut matches: Vec<String> = Vec::new();

        for keyword in keywords {
            let phrase = self.lexicon.normalize(keyword);

            let matched = phrase
                .split(' ')
                .filter(|word| !word.is_empty())
                .find(|word| resume.content.contains(word))
                .or_else(|| {
                    best_match(&phrase, resume.content.iter(), None)
                        .filter(|hit| hit.similarity >= self.config.indicator_threshold)
                        .map(|hit| hit.candidate)
                });

            if let Some(word) = matched {
                hits += 1;
                if !matches.iter().any(|seen| seen == word) {
                    matches.push(word.to_string());
                }
            }
        }

        let ratio = hits as f64 / keywords.len() as f64;

        IndicatorScore {
            name: name.to_string(),
            score: to_five(ratio.min(1.0)),
            ratio,
            matches,
        }
    }
}
