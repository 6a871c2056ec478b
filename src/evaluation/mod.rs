pub mod aggregate;

use once_cell::sync::Lazy;

use crate::catalog::{AdviceTable, Catalog, IndicatorTable, RoleProfile};
use crate::config::{ConfigError, ScoringConfig, DEFAULT_CONFIG};
use crate::scoring::{IndicatorScorer, ItemScorer, PresentationScorer, SentenceDensity};
use crate::types::{EvaluationRequest, EvaluationResult, IndicatorScore, ItemScore, ResumeDigest};

use aggregate::{global_score, section_averages};

static DEFAULT_EVALUATOR: Lazy<Evaluator> = Lazy::new(|| Evaluator {
    presentation: DEFAULT_CONFIG.presentation.clone(),
    config: DEFAULT_CONFIG.clone(),
});

/// Runs every scorer over one résumé and aggregates the results.
///
/// Holds no per-evaluation state; a single evaluator can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct Evaluator<P = SentenceDensity> {
    config: ScoringConfig,
    presentation: P,
}

impl Evaluator<SentenceDensity> {
    /// Evaluator using the presentation heuristic configured in `config`.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            presentation: config.presentation.clone(),
            config,
        })
    }
}

impl Default for Evaluator<SentenceDensity> {
    fn default() -> Self {
        DEFAULT_EVALUATOR.clone()
    }
}

impl<P> Evaluator<P>
where
    P: PresentationScorer,
{
    /// Evaluator with a caller-supplied presentation scorer.
    ///
    /// `config.presentation` is still validated but plays no part in
    /// scoring; `presentation` replaces it.
    pub fn with_presentation(config: ScoringConfig, presentation: P) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            presentation,
        })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(
        &self,
        request: &EvaluationRequest,
        role: &RoleProfile,
        indicators: &IndicatorTable,
        advice: &AdviceTable,
    ) -> EvaluationResult {
        self.evaluate_parts(request, &role.duties, &role.traits, indicators, advice)
    }

    /// Evaluate against a catalog. A role missing from the catalog is
    /// evaluated with no duties and no profile traits.
    pub fn evaluate_with_catalog(
        &self,
        request: &EvaluationRequest,
        catalog: &Catalog,
    ) -> EvaluationResult {
        match catalog.role(&request.role) {
            Some(profile) => self.evaluate(request, profile, &catalog.indicators, &catalog.advice),
            None => {
                tracing::warn!(role = %request.role, "role not in catalog, scoring without duties or profile");
                self.evaluate_parts(request, &[], &[], &catalog.indicators, &catalog.advice)
            }
        }
    }

    pub fn evaluate_parts(
        &self,
        request: &EvaluationRequest,
        duties: &[String],
        profile_traits: &[String],
        indicators: &IndicatorTable,
        advice: &AdviceTable,
    ) -> EvaluationResult {
        let span = tracing::debug_span!(
            "evaluate",
            role = %request.role,
            chapter = %request.chapter
        );
        let _enter = span.enter();

        // 1. Tokenize the résumé once for every scorer
        let resume = self.config.lexicon.analyze(&request.resume_text);
        tracing::debug!(
            tokens = resume.all.len(),
            content_tokens = resume.content.len(),
            "résumé tokenized"
        );

        // 2. Item phase
        let item_scorer = ItemScorer::new(&self.config);
        let score_all = |items: &[String]| -> Vec<ItemScore> {
            items
                .iter()
                .map(|item| {
                    let scored = item_scorer.score(item, &resume);
                    tracing::trace!(item = %item, score = scored.score, "item scored");
                    scored
                })
                .collect()
        };
        let duty_scores = score_all(duties);
        let profile_scores = score_all(profile_traits);

        // 3. Indicator phase
        let indicator_scores: Vec<IndicatorScore> =
            match indicators.indicators_for(&request.chapter, &request.role) {
                Some(set) => {
                    let scorer = IndicatorScorer::new(&self.config);
                    set.iter()
                        .map(|(name, keywords)| scorer.score(name, keywords, &resume))
                        .collect()
                }
                None => {
                    tracing::warn!(
                        role = %request.role,
                        chapter = %request.chapter,
                        "no indicators defined for chapter and role"
                    );
                    Vec::new()
                }
            };

        // 4. Presentation phase
        let presentation = self.presentation.score(&request.resume_text);

        // 5. Aggregation
        let averages = section_averages(&duty_scores, &profile_scores, &indicator_scores, presentation);
        let global = global_score(&averages);
        let suggestions =
            aggregate::suggestions(&request.role, &indicator_scores, advice, &self.config);

        debug_assert!((1.0..=5.0).contains(&global.score));

        tracing::debug!(
            duties = duty_scores.len(),
            profile = profile_scores.len(),
            indicators = indicator_scores.len(),
            suggestions = suggestions.len(),
            global = global.score,
            "evaluation complete"
        );

        EvaluationResult {
            candidate: request.candidate.clone(),
            role: request.role.clone(),
            chapter: request.chapter.clone(),
            resume_digest: ResumeDigest::from_text(&request.resume_text),
            duties: duty_scores,
            profile: profile_scores,
            indicators: indicator_scores,
            presentation,
            averages,
            global,
            suggestions,
        }
    }
}

/// Evaluate with the default Spanish configuration.
pub fn evaluate(
    role: &str,
    chapter: &str,
    resume_text: &str,
    duties: &[String],
    profile_traits: &[String],
    indicators: &IndicatorTable,
    advice: &AdviceTable,
) -> EvaluationResult {
    let request = EvaluationRequest::new(role, chapter, resume_text);
    DEFAULT_EVALUATOR.evaluate_parts(&request, duties, profile_traits, indicators, advice)
}
