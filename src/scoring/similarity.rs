//! Edit-distance primitives and token-set ratios.
//!
//! Cost is O(|a|·|b|) per word pair, so a fuzzy pass over an item is
//! O(item tokens · résumé tokens · word length²). Fine at résumé scale; very
//! large documents should be split before scoring.

use strsim::levenshtein;

use crate::text::TokenSet;

/// Levenshtein distance over chars, unit costs.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// `1 - d / max(len)` in [0, 1]. Two empty strings are identical.
pub fn word_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let sim = 1.0 - edit_distance(a, b) as f64 / max_len as f64;
    sim.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyHit<'a> {
    pub candidate: &'a str,
    pub similarity: f64,
}

/// Best-scoring candidate for `needle`.
///
/// Ties keep the earliest candidate. Candidates with similarity 0 never win,
/// so an empty or fully dissimilar candidate list yields `None`. With
/// `early_exit`, the scan stops at the first candidate reaching the threshold.
pub fn best_match<'a, I>(needle: &str, candidates: I, early_exit: Option<f64>) -> Option<FuzzyHit<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<FuzzyHit<'a>> = None;

    for candidate in candidates {
        let similarity = word_similarity(needle, candidate);
        if similarity > best.map_or(0.0, |hit| hit.similarity) {
            best = Some(FuzzyHit {
                candidate,
                similarity,
            });
        }

        if let (Some(threshold), Some(hit)) = (early_exit, best) {
            if hit.similarity >= threshold {
                break;
            }
        }
    }

    best
}

/// Share of `item` tokens found verbatim in `resume`. Repeated item tokens
/// count once per occurrence.
pub fn overlap_ratio(item: &TokenSet, resume: &TokenSet) -> f64 {
    if item.is_empty() {
        return 0.0;
    }

    let hits = item.iter().filter(|token| resume.contains(token)).count();
    hits as f64 / item.len() as f64
}

/// Mean per-token credit: 1 on an exact hit, best word similarity otherwise.
pub fn fuzzy_ratio(item: &TokenSet, resume: &TokenSet, early_exit: Option<f64>) -> f64 {
    if item.is_empty() {
        return 0.0;
    }

    let total: f64 = item
        .iter()
        .map(|token| {
            if resume.contains(token) {
                1.0
            } else {
                best_match(token, resume.iter(), early_exit).map_or(0.0, |hit| hit.similarity)
            }
        })
        .sum();

    total / item.len() as f64
}
