use std::io::Read;

use serde::{Deserialize, Serialize};

use super::CatalogError;

// Entries this short carry no scorable statement.
const MIN_ITEM_CHARS: usize = 3;

/// The statements a role is evaluated against.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleProfile {
    pub duties: Vec<String>,
    pub traits: Vec<String>,
}

impl RoleProfile {
    /// Entries are trimmed; blank and too-short entries are dropped.
    pub fn new<D, T>(duties: D, traits: T) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        Self {
            duties: clean_items(duties),
            traits: clean_items(traits),
        }
    }

    /// Build from a duty document and a profile document, each in any shape
    /// accepted by [`parse_items`].
    pub fn from_json(duties_json: &str, traits_json: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            duties: parse_items("duty list", duties_json)?,
            traits: parse_items("profile list", traits_json)?,
        })
    }

    /// Like [`RoleProfile::from_json`], but an unreadable list is empty.
    pub fn from_json_or_empty(duties_json: &str, traits_json: &str) -> Self {
        Self {
            duties: parse_items_or_empty("duty list", duties_json),
            traits: parse_items_or_empty("profile list", traits_json),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.duties.is_empty() && self.traits.is_empty()
    }
}

#[derive(Deserialize)]
struct ItemListDocument {
    contenido: Option<Vec<Option<String>>>,
    items: Option<Vec<Option<String>>>,
    funciones: Option<Vec<Option<String>>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemListShape {
    Bare(Vec<Option<String>>),
    Document(ItemListDocument),
}

impl ItemListShape {
    fn into_items(self) -> Vec<String> {
        let entries = match self {
            ItemListShape::Bare(entries) => entries,
            ItemListShape::Document(doc) => doc
                .contenido
                .or(doc.items)
                .or(doc.funciones)
                .unwrap_or_default(),
        };
        clean_items(entries.into_iter().flatten())
    }
}

/// Parse a role item list.
///
/// Accepts `{"contenido": [...]}`, `{"items": [...]}`, `{"funciones": [...]}`
/// (first present key wins, in that order) or a bare array. `null` entries
/// are skipped. An object with none of the keys is an empty list.
pub fn parse_items(resource: &str, json: &str) -> Result<Vec<String>, CatalogError> {
    serde_json::from_str::<ItemListShape>(json)
        .map(ItemListShape::into_items)
        .map_err(|e| CatalogError::parse(resource, e))
}

pub fn parse_items_reader<R: Read>(resource: &str, reader: R) -> Result<Vec<String>, CatalogError> {
    serde_json::from_reader::<_, ItemListShape>(reader)
        .map(ItemListShape::into_items)
        .map_err(|e| CatalogError::parse(resource, e))
}

pub fn parse_items_or_empty(resource: &str, json: &str) -> Vec<String> {
    parse_items(resource, json).unwrap_or_else(|err| {
        tracing::warn!(resource, error = %err, "using empty item list");
        Vec::new()
    })
}

fn clean_items<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| item.as_ref().trim().to_string())
        .filter(|item| item.chars().count() >= MIN_ITEM_CHARS)
        .collect()
}
