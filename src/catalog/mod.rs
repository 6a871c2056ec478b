//! In-memory shapes of the externally loaded scoring data.
//!
//! Reading files or fetching documents is the caller's job; this module only
//! turns already-read JSON into the tables the evaluator consumes.

pub mod role;
pub mod tables;

use std::collections::BTreeMap;

use thiserror::Error;

pub use role::{parse_items, parse_items_or_empty, parse_items_reader, RoleProfile};
pub use tables::{AdviceTable, IndicatorSet, IndicatorTable};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Could not parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub(crate) fn parse(resource: &str, source: serde_json::Error) -> Self {
        CatalogError::Parse {
            resource: resource.to_string(),
            source,
        }
    }
}

/// Everything needed to evaluate any role in any chapter.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    roles: BTreeMap<String, RoleProfile>,
    pub indicators: IndicatorTable,
    pub advice: AdviceTable,
}

impl Catalog {
    pub fn new(indicators: IndicatorTable, advice: AdviceTable) -> Self {
        Self {
            roles: BTreeMap::new(),
            indicators,
            advice,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>, profile: RoleProfile) -> Self {
        self.roles.insert(role.into(), profile);
        self
    }

    pub fn insert_role(&mut self, role: impl Into<String>, profile: RoleProfile) {
        self.roles.insert(role.into(), profile);
    }

    pub fn role(&self, role: &str) -> Option<&RoleProfile> {
        self.roles.get(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }
}
