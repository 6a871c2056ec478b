use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scoring::presentation::SentenceDensity;
use crate::text::Lexicon;

pub(crate) static DEFAULT_CONFIG: Lazy<ScoringConfig> = Lazy::new(ScoringConfig::v0);

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Item weight {name} must be a finite, non-negative number, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("Item weights must sum to 1, got {0}")]
    WeightSum(f64),

    #[error("Threshold {name} is outside [{min}, {max}]: {value}")]
    ThresholdOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Verb saturation must be at least 1")]
    ZeroVerbSaturation,

    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Weights of the three item signals. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemWeights {
    pub overlap: f64,
    pub fuzzy: f64,
    pub verb: f64,
}

impl Default for ItemWeights {
    fn default() -> Self {
        Self {
            overlap: 0.6,
            fuzzy: 0.3,
            verb: 0.1,
        }
    }
}

// Every field has an explicit default so a config document only needs to
// name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ItemWeights,

    /// Résumé-wide verb count at which the verb signal saturates, for items
    /// that name no verb themselves.
    pub verb_saturation: usize,

    /// Stop a fuzzy scan once a candidate reaches this similarity.
    /// `None` always scans every candidate.
    pub fuzzy_early_exit: Option<f64>,

    /// Minimum similarity for a fuzzy match to be reported as evidence.
    pub evidence_threshold: f64,

    /// Minimum phrase-to-token similarity for a fuzzy indicator hit.
    pub indicator_threshold: f64,

    /// Indicators scoring strictly below this (1–5 scale) receive advice.
    pub advice_threshold: f64,

    /// Used when the advice table has nothing for an indicator.
    /// `{indicator}` is replaced with the indicator name.
    pub fallback_advice: String,

    /// Used by [`Evaluator::new`](crate::Evaluator::new). Ignored by
    /// evaluators built with a custom presentation scorer.
    pub presentation: SentenceDensity,

    pub lexicon: Lexicon,
}

impl ScoringConfig {
    pub fn v0() -> Self {
        Self {
            weights: ItemWeights::default(),
            verb_saturation: 2,
            fuzzy_early_exit: None,
            evidence_threshold: 0.6,
            indicator_threshold: 0.8,
            advice_threshold: 3.5,
            fallback_advice: "Mejorar experiencia relacionada con {indicator}".into(),
            presentation: SentenceDensity::v0(),
            lexicon: Lexicon::spanish(),
        }
    }

    /// Parse a (possibly partial) JSON document over the defaults and
    /// validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("overlap", self.weights.overlap),
            ("fuzzy", self.weights.fuzzy),
            ("verb", self.weights.verb),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }

        let sum = self.weights.overlap + self.weights.fuzzy + self.weights.verb;
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }

        if self.verb_saturation == 0 {
            return Err(ConfigError::ZeroVerbSaturation);
        }

        check_range("evidence_threshold", self.evidence_threshold, 0.0, 1.0)?;
        check_range("indicator_threshold", self.indicator_threshold, 0.0, 1.0)?;
        check_range("advice_threshold", self.advice_threshold, 1.0, 5.0)?;
        if let Some(early_exit) = self.fuzzy_early_exit {
            check_range("fuzzy_early_exit", early_exit, 0.0, 1.0)?;
        }

        let p = &self.presentation;
        check_range("presentation.base", p.base, 0.0, 1.0)?;
        check_range("presentation.long_text_bonus", p.long_text_bonus, 0.0, 1.0)?;
        check_range("presentation.sentence_bonus", p.sentence_bonus, 0.0, 1.0)?;

        Ok(())
    }

    pub fn fallback_advice_for(&self, indicator: &str) -> String {
        self.fallback_advice.replace("{indicator}", indicator)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons and is rejected here too.
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
