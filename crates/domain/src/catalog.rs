//! Catalog browsing types and the client-side catalog filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The minimal shape surfaced while browsing the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: Option<i64>,
    pub name: String,
}

impl CatalogEntry {
    pub fn new(id: Option<i64>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The id as text, empty when absent.
    pub fn id_text(&self) -> String {
        self.id.map(|id| id.to_string()).unwrap_or_default()
    }

    /// Query that selects this entry through a single-creature lookup.
    ///
    /// Prefers the name; falls back to the id when the name is empty.
    pub fn lookup_key(&self) -> Option<String> {
        if !self.name.is_empty() {
            Some(self.name.clone())
        } else {
            self.id.map(|id| id.to_string())
        }
    }
}

/// Case-insensitive substring filter over catalog entries.
///
/// An entry matches when its lower-cased name contains the query, or when its
/// id rendered as text contains the query ("1" matches 1, 10, 21).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    query: String,
}

impl CatalogFilter {
    /// Build a filter from raw user input. The input is trimmed and lower-cased.
    pub fn new(raw: &str) -> Self {
        Self {
            query: raw.trim().to_lowercase(),
        }
    }

    /// True when the filter lets every entry through.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if self.is_empty() {
            return true;
        }
        entry.name.to_lowercase().contains(&self.query) || entry.id_text().contains(&self.query)
    }

    /// Matching entries in source order. An empty filter returns the input unchanged.
    pub fn apply(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        if self.is_empty() {
            return entries.to_vec();
        }
        entries
            .iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect()
    }
}

/// Filter `entries` by a raw query string.
pub fn filter_catalog(entries: &[CatalogEntry], query: &str) -> Vec<CatalogEntry> {
    CatalogFilter::new(query).apply(entries)
}

/// "N of M shown" counters for a filtered catalog view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} shown", self.shown, self.total)
    }
}
