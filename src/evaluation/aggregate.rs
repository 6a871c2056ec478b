use std::collections::BTreeMap;

use crate::catalog::AdviceTable;
use crate::config::ScoringConfig;
use crate::scoring::scale::{from_five, mean, to_five};
use crate::types::{IndicatorScore, ItemScore, SectionAverages, SectionScore};

fn section(raw: f64) -> SectionScore {
    SectionScore {
        raw,
        score: to_five(raw),
    }
}

pub fn item_average(items: &[ItemScore]) -> SectionScore {
    section(mean(items.iter().map(|item| item.raw)))
}

/// Indicators only carry a display score, so each one goes back to raw
/// before averaging and the mean goes forward again. The round trip through
/// two-decimal display scores is part of the result.
pub fn indicator_average(indicators: &[IndicatorScore]) -> SectionScore {
    section(mean(indicators.iter().map(|ind| from_five(ind.score))))
}

pub fn section_averages(
    duties: &[ItemScore],
    profile: &[ItemScore],
    indicators: &[IndicatorScore],
    presentation: f64,
) -> SectionAverages {
    SectionAverages {
        duties: item_average(duties),
        profile: item_average(profile),
        indicators: indicator_average(indicators),
        presentation: section(from_five(presentation)),
    }
}

/// Unweighted mean of the four section raw scores.
pub fn global_raw(duties: f64, profile: f64, indicators: f64, presentation: f64) -> f64 {
    (duties + profile + indicators + presentation) / 4.0
}

pub fn global_score(averages: &SectionAverages) -> SectionScore {
    section(global_raw(
        averages.duties.raw,
        averages.profile.raw,
        averages.indicators.raw,
        averages.presentation.raw,
    ))
}

/// Advice for every indicator strictly below `config.advice_threshold`:
/// the first table entry for (role, indicator), or the fallback template.
pub fn suggestions(
    role: &str,
    indicators: &[IndicatorScore],
    advice: &AdviceTable,
    config: &ScoringConfig,
) -> BTreeMap<String, String> {
    indicators
        .iter()
        .filter(|ind| ind.score < config.advice_threshold)
        .map(|ind| {
            let text = advice
                .first_advice(role, &ind.name)
                .map(str::to_string)
                .unwrap_or_else(|| config.fallback_advice_for(&ind.name));
            (ind.name.clone(), text)
        })
        .collect()
}
