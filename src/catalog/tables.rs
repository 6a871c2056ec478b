use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// Indicator name to keyword phrases. Iterates in name order.
pub type IndicatorSet = BTreeMap<String, Vec<String>>;

/// chapter → role → indicator → keyword phrases.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorTable {
    chapters: BTreeMap<String, BTreeMap<String, IndicatorSet>>,
}

impl IndicatorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        chapter: impl Into<String>,
        role: impl Into<String>,
        indicator: impl Into<String>,
        keywords: Vec<String>,
    ) {
        self.chapters
            .entry(chapter.into())
            .or_default()
            .entry(role.into())
            .or_default()
            .insert(indicator.into(), keywords);
    }

    pub fn indicators_for(&self, chapter: &str, role: &str) -> Option<&IndicatorSet> {
        self.chapters.get(chapter)?.get(role)
    }

    pub fn chapters(&self) -> impl Iterator<Item = &str> {
        self.chapters.keys().map(String::as_str)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::parse("indicator table", e))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        serde_json::from_reader(reader).map_err(|e| CatalogError::parse("indicator table", e))
    }

    /// Like [`IndicatorTable::from_json`], but an unreadable table is empty.
    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using empty indicator table");
            Self::default()
        })
    }
}

/// role → indicator → advice strings, most relevant first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdviceTable {
    roles: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl AdviceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        role: impl Into<String>,
        indicator: impl Into<String>,
        advice: Vec<String>,
    ) {
        self.roles
            .entry(role.into())
            .or_default()
            .insert(indicator.into(), advice);
    }

    pub fn first_advice(&self, role: &str, indicator: &str) -> Option<&str> {
        self.roles
            .get(role)?
            .get(indicator)?
            .first()
            .map(String::as_str)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(json).map_err(|e| CatalogError::parse("advice table", e))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        serde_json::from_reader(reader).map_err(|e| CatalogError::parse("advice table", e))
    }

    pub fn from_json_or_empty(json: &str) -> Self {
        Self::from_json(json).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using empty advice table");
            Self::default()
        })
    }
}
