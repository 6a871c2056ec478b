use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::identifiers::ResumeDigest;

/// One evaluation request, as submitted by a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    pub role: String,
    pub chapter: String,
    pub resume_text: String,
}

impl EvaluationRequest {
    pub fn new(
        role: impl Into<String>,
        chapter: impl Into<String>,
        resume_text: impl Into<String>,
    ) -> Self {
        Self {
            candidate: None,
            role: role.into(),
            chapter: chapter.into(),
            resume_text: resume_text.into(),
        }
    }

    pub fn with_candidate(mut self, candidate: impl Into<String>) -> Self {
        self.candidate = Some(candidate.into());
        self
    }
}

/// An item token that matched a résumé token approximately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyEvidence {
    pub item: String,
    #[serde(rename = "match")]
    pub matched: String,
    /// Rounded to two decimals.
    pub similarity: f64,
}

/// Score of one duty or profile statement against the résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemScore {
    pub item: String,

    /// Combined score in [0, 1].
    pub raw: f64,
    /// `raw` on the 1–5 scale.
    pub score: f64,

    pub overlap: f64,
    pub fuzzy: f64,
    pub verb: f64,

    pub evidence_exact: Vec<String>,
    pub evidence_fuzzy: Vec<FuzzyEvidence>,
}

impl ItemScore {
    /// Result for an item with no meaningful tokens.
    pub fn empty(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            raw: 0.0,
            score: 1.0,
            overlap: 0.0,
            fuzzy: 0.0,
            verb: 0.0,
            evidence_exact: Vec::new(),
            evidence_fuzzy: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScore {
    pub name: String,
    /// 1–5 scale.
    pub score: f64,
    /// Matched phrases over total phrases.
    pub ratio: f64,
    pub matches: Vec<String>,
}

/// A section result on both scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionScore {
    pub raw: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionAverages {
    pub duties: SectionScore,
    pub profile: SectionScore,
    pub indicators: SectionScore,
    pub presentation: SectionScore,
}

/// The complete, self-contained outcome of one evaluation.
///
/// Renderers consume this as-is; nothing in it needs recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    pub role: String,
    pub chapter: String,
    pub resume_digest: ResumeDigest,

    pub duties: Vec<ItemScore>,
    pub profile: Vec<ItemScore>,
    pub indicators: Vec<IndicatorScore>,
    /// 1–5 scale.
    pub presentation: f64,

    pub averages: SectionAverages,
    pub global: SectionScore,

    /// Advice keyed by indicator name, only for indicators below threshold.
    pub suggestions: BTreeMap<String, String>,
}
