pub mod indicator;
pub mod item;
pub mod presentation;
pub mod scale;
pub mod similarity;

use crate::config::DEFAULT_CONFIG;
use crate::types::{IndicatorScore, ItemScore};

pub use indicator::IndicatorScorer;
pub use item::ItemScorer;
pub use presentation::{PresentationScorer, SentenceDensity};
pub use scale::{from_five, to_five};
pub use similarity::{best_match, edit_distance, fuzzy_ratio, overlap_ratio, word_similarity, FuzzyHit};

/// Score one duty or profile statement with the default configuration.
pub fn score_item(item: &str, resume_text: &str) -> ItemScore {
    let config = &*DEFAULT_CONFIG;
    let resume = config.lexicon.analyze(resume_text);
    ItemScorer::new(config).score(item, &resume)
}

/// Score one unnamed keyword list with the default configuration.
pub fn score_indicator(keywords: &[String], resume_text: &str) -> IndicatorScore {
    let config = &*DEFAULT_CONFIG;
    let resume = config.lexicon.analyze(resume_text);
    IndicatorScorer::new(config).score("", keywords, &resume)
}

pub fn score_presentation(resume_text: &str) -> f64 {
    DEFAULT_CONFIG.presentation.score(resume_text)
}
