use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::license::alias::{AliasResolver, UNKNOWN};

const BUNDLED_CATALOG: &str = include_str!("../../resources/default-unifiedlist.json");

/// Raised when a canonical name has no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No URL was found for [{0}]")]
    Unregistered(String),
}

/// Approval status and reference URL for one canonical license.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CatalogEntry {
    /// Only the literal `"yes"` marks a license as approved.
    #[serde(default)]
    pub approved: Option<String>,
    /// Empty when no reference URL is known.
    #[serde(default)]
    pub url: String,
}

impl CatalogEntry {
    pub fn is_approved(&self) -> bool {
        self.approved.as_deref() == Some("yes")
    }
}

/// Reference list of canonical license names.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl Catalog {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// Catalog shipped inside the binary.
    pub fn bundled() -> serde_json::Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names whose entry is approved.
    pub fn approved_names(&self) -> HashSet<&str> {
        self.names_where(|entry| entry.is_approved())
    }

    /// Names whose entry exists but is not approved.
    pub fn not_approved_names(&self) -> HashSet<&str> {
        self.names_where(|entry| !entry.is_approved())
    }

    fn names_where(&self, keep: impl Fn(&CatalogEntry) -> bool) -> HashSet<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| keep(entry))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Reference URL for a canonical name.
    ///
    /// [`UNKNOWN`] passes through unchanged, even when the catalog has an entry
    /// of that name. Any other name missing from the catalog is an error: the
    /// alias table and the catalog disagree.
    pub fn url_for(&self, name: &str) -> Result<&str, LookupError> {
        if name == UNKNOWN {
            return Ok(UNKNOWN);
        }
        self.entries
            .get(name)
            .map(|entry| entry.url.as_str())
            .ok_or_else(|| LookupError::Unregistered(name.to_string()))
    }

    /// Canonical names the resolver can produce that have no catalog entry.
    pub fn unregistered<'a>(&self, resolver: &'a AliasResolver) -> Vec<&'a str> {
        resolver
            .canonical_names()
            .into_iter()
            .filter(|name| !self.entries.contains_key(*name))
            .collect()
    }
}
