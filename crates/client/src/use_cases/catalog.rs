//! Catalog browsing use case.

use std::sync::Arc;

use bestiary_domain::{CatalogEntry, CatalogFilter, CatalogSummary};

use crate::infrastructure::catalog_cache::CatalogCache;
use crate::infrastructure::normalize::catalog_entry;

/// Browse and filter the cached creature catalog.
pub struct BrowseCatalog {
    cache: Arc<CatalogCache>,
}

impl BrowseCatalog {
    pub fn new(cache: Arc<CatalogCache>) -> Self {
        Self { cache }
    }

    /// The full catalog, loading it on first use. Never fails.
    pub async fn execute(&self) -> Vec<CatalogEntry> {
        self.cache
            .ensure_loaded()
            .await
            .iter()
            .map(catalog_entry)
            .collect()
    }

    /// Filter whatever catalog has been loaded so far.
    ///
    /// Before the first `execute` there is nothing to search and the result is empty.
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let filter = CatalogFilter::new(query);
        self.loaded_entries()
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    /// Shown/total counters for `query` against the loaded catalog.
    pub fn summarize(&self, query: &str) -> CatalogSummary {
        let entries = self.loaded_entries();
        let filter = CatalogFilter::new(query);
        CatalogSummary {
            shown: entries.iter().filter(|entry| filter.matches(entry)).count(),
            total: entries.len(),
        }
    }

    fn loaded_entries(&self) -> Vec<CatalogEntry> {
        self.cache
            .snapshot()
            .map(|raw| raw.iter().map(catalog_entry).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::ApiConfig;
    use crate::infrastructure::ports::{MockHttpTransport, TransportError};
    use crate::infrastructure::resolver::EndpointResolver;
    use serde_json::json;

    fn browse(mock: MockHttpTransport) -> BrowseCatalog {
        let config = ApiConfig::new("https://catalog.test/api").expect("config");
        let resolver = EndpointResolver::new(Arc::new(mock), &config);
        BrowseCatalog::new(Arc::new(CatalogCache::new(resolver)))
    }

    fn catalog_mock() -> MockHttpTransport {
        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .withf(|url| url == "https://catalog.test/api/creature")
            .times(1)
            .returning(|_| {
                Ok(json!([
                    { "id": 1, "name": "Pyrolynx", "types": [{ "name": "fire" }] },
                    { "id": 2, "name": "Aquoroc" },
                    { "id": 10, "name": "Voltadon" },
                    { "name": "Mistwing" }
                ]))
            });
        mock
    }

    #[tokio::test]
    async fn browse_projects_entries_in_order() {
        let catalog = browse(catalog_mock());

        let entries = catalog.execute().await;
        assert_eq!(
            entries,
            vec![
                CatalogEntry::new(Some(1), "Pyrolynx"),
                CatalogEntry::new(Some(2), "Aquoroc"),
                CatalogEntry::new(Some(10), "Voltadon"),
                CatalogEntry::new(None, "Mistwing"),
            ]
        );
    }

    #[tokio::test]
    async fn browse_twice_hits_the_network_once() {
        let catalog = browse(catalog_mock());
        let first = catalog.execute().await;
        let second = catalog.execute().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn search_filters_the_loaded_catalog() {
        let catalog = browse(catalog_mock());
        let all = catalog.execute().await;

        assert_eq!(catalog.search(""), all);
        assert_eq!(
            catalog.search("1"),
            vec![
                CatalogEntry::new(Some(1), "Pyrolynx"),
                CatalogEntry::new(Some(10), "Voltadon"),
            ]
        );
        assert_eq!(catalog.search(" AQUO "), vec![CatalogEntry::new(Some(2), "Aquoroc")]);
        assert_eq!(
            catalog.summarize("o"),
            CatalogSummary { shown: 3, total: 4 }
        );
    }

    #[test]
    fn search_before_browse_is_empty() {
        let catalog = browse(MockHttpTransport::new());
        assert!(catalog.search("").is_empty());
        assert_eq!(catalog.summarize(""), CatalogSummary::default());
    }

    #[tokio::test]
    async fn unreachable_catalog_browses_as_empty() {
        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .times(2)
            .returning(|_| Err(TransportError::Network("offline".into())));

        let catalog = browse(mock);
        assert!(catalog.execute().await.is_empty());
        assert!(catalog.search("a").is_empty());
    }
}
