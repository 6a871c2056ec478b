use std::fmt::Write;

use crate::scoring::scale::round2;
use crate::types::{EvaluationResult, ItemScore};

use super::ReportRenderer;

/// Console report: summary line, per-item detail with evidence, indicators
/// with their matches and advice.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl ReportRenderer for PlainTextRenderer {
    type Output = String;

    fn render(&self, result: &EvaluationResult) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = write_report(&mut out, result);
        out
    }
}

fn write_report(out: &mut String, result: &EvaluationResult) -> std::fmt::Result {
    match &result.candidate {
        Some(candidate) => writeln!(out, "Résumé analysis: {} ({})", candidate, result.role)?,
        None => writeln!(out, "Résumé analysis: {}", result.role)?,
    }
    writeln!(out, "Chapter: {}", result.chapter)?;

    let a = &result.averages;
    writeln!(
        out,
        "Duties: {}/5  Profile: {}/5  Indicators: {}/5  Presentation: {}/5",
        a.duties.score, a.profile.score, a.indicators.score, result.presentation
    )?;
    writeln!(out, "Global: {}/5", result.global.score)?;

    write_items(out, "Duties", &result.duties, "No duties defined for this role.")?;
    write_items(out, "Profile", &result.profile, "No profile traits defined for this role.")?;

    writeln!(out)?;
    writeln!(out, "Indicators")?;
    if result.indicators.is_empty() {
        writeln!(out, "  No indicators defined for this chapter and role.")?;
    }
    for indicator in &result.indicators {
        writeln!(out, "  - {} [{}/5] ratio: {}", indicator.name, indicator.score, round2(indicator.ratio))?;
        if indicator.matches.is_empty() {
            writeln!(out, "    no keywords found")?;
        } else {
            writeln!(out, "    keywords found: {}", indicator.matches.join(", "))?;
        }
        if let Some(advice) = result.suggestions.get(&indicator.name) {
            writeln!(out, "    advice: {advice}")?;
        }
    }

    Ok(())
}

fn write_items(out: &mut String, title: &str, items: &[ItemScore], empty: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    if items.is_empty() {
        writeln!(out, "  {empty}")?;
        return Ok(());
    }

    for item in items {
        writeln!(
            out,
            "  - {} [{}/5] (overlap: {}, fuzzy: {}, verb: {})",
            item.item,
            item.score,
            round2(item.overlap),
            round2(item.fuzzy),
            round2(item.verb)
        )?;
        if !item.evidence_exact.is_empty() {
            writeln!(out, "    exact: {}", item.evidence_exact.join(", "))?;
        }
        if !item.evidence_fuzzy.is_empty() {
            let pairs: Vec<String> = item
                .evidence_fuzzy
                .iter()
                .map(|e| format!("{}→{} ({})", e.item, e.matched, e.similarity))
                .collect();
            writeln!(out, "    fuzzy: {}", pairs.join(", "))?;
        }
    }

    Ok(())
}
