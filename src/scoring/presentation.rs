use serde::{Deserialize, Serialize};

use super::scale::to_five;

pub trait PresentationScorer {
    /// Structural quality of the résumé text, on the 1–5 scale.
    fn score(&self, text: &str) -> f64;
}

/// Length and sentence-density heuristic.
///
/// Texts under `min_chars` score 1. Otherwise the raw score starts at `base`,
/// gains `long_text_bonus` past `long_text_chars`, and gains
/// `sentence_bonus` when the average sentence length lies strictly inside
/// (`sentence_min`, `sentence_max`). Lengths are in chars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceDensity {
    pub min_chars: usize,
    pub base: f64,
    pub long_text_chars: usize,
    pub long_text_bonus: f64,
    pub sentence_min: f64,
    pub sentence_max: f64,
    pub sentence_bonus: f64,
}

impl SentenceDensity {
    pub fn v0() -> Self {
        Self {
            min_chars: 120,
            base: 0.6,
            long_text_chars: 800,
            long_text_bonus: 0.2,
            sentence_min: 25.0,
            sentence_max: 140.0,
            sentence_bonus: 0.2,
        }
    }
}

impl Default for SentenceDensity {
    fn default() -> Self {
        Self::v0()
    }
}

impl PresentationScorer for SentenceDensity {
    fn score(&self, text: &str) -> f64 {
        let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        let length = text.chars().count();
        if length < self.min_chars {
            return 1.0;
        }

        let sentences = text
            .split(|c| matches!(c, '.' | '!' | '?'))
            .filter(|s| !s.trim().is_empty())
            .count();
        let average = if sentences == 0 {
            length as f64
        } else {
            length as f64 / sentences as f64
        };

        let mut raw = self.base;
        if length > self.long_text_chars {
            raw += self.long_text_bonus;
        }
        if average > self.sentence_min && average < self.sentence_max {
            raw += self.sentence_bonus;
        }

        to_five(raw.min(1.0))
    }
}
