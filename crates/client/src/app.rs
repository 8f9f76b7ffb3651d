//! Application composition.

use std::sync::Arc;

use bestiary_domain::{CatalogEntry, CatalogSummary, CreatureRecord};

use crate::infrastructure::{
    catalog_cache::CatalogCache,
    config::{ApiConfig, ConfigError},
    http::ReqwestTransport,
    ports::HttpTransport,
    resolver::EndpointResolver,
};
use crate::use_cases::{BrowseCatalog, LookupCreature, LookupError};

/// Entry point for a presentation layer.
///
/// Owns the catalog cache for the lifetime of the process; create one and
/// share it rather than building a new one per request.
pub struct Bestiary {
    lookup: LookupCreature,
    catalog: BrowseCatalog,
}

impl Bestiary {
    /// Compose the client over any transport.
    pub fn new(transport: Arc<dyn HttpTransport>, config: &ApiConfig) -> Self {
        let resolver = EndpointResolver::new(transport, config);
        let cache = Arc::new(CatalogCache::new(resolver.clone()));

        Self {
            lookup: LookupCreature::new(resolver),
            catalog: BrowseCatalog::new(cache),
        }
    }

    /// Compose the client over HTTP.
    pub fn from_config(config: &ApiConfig) -> Self {
        let transport = Arc::new(ReqwestTransport::from_config(config));
        Self::new(transport, config)
    }

    /// Compose the client over HTTP using `BESTIARY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ApiConfig::from_env()?;
        tracing::info!(
            base_url = %config.base_url(),
            timeout_secs = config.request_timeout().as_secs(),
            "Bestiary client configured"
        );
        Ok(Self::from_config(&config))
    }

    /// Look up one creature by name or id.
    pub async fn lookup(&self, query: &str) -> Result<CreatureRecord, LookupError> {
        self.lookup.execute(query).await
    }

    /// The full catalog; empty when the service is unreachable.
    pub async fn browse_all(&self) -> Vec<CatalogEntry> {
        self.catalog.execute().await
    }

    /// Filter the catalog returned by the last `browse_all`.
    pub fn search_catalog(&self, query: &str) -> Vec<CatalogEntry> {
        self.catalog.search(query)
    }

    /// "N of M shown" counters for `query`.
    pub fn catalog_summary(&self, query: &str) -> CatalogSummary {
        self.catalog.summarize(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockHttpTransport, TransportError};
    use mockall::Sequence;
    use serde_json::json;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    fn init_tracing() {
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "bestiary_client=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    }

    fn bestiary(mock: MockHttpTransport) -> Bestiary {
        let config = ApiConfig::new("https://catalog.test/api").expect("config");
        Bestiary::new(Arc::new(mock), &config)
    }

    #[tokio::test]
    async fn picking_a_catalog_entry_feeds_lookup() {
        init_tracing();

        let mut mock = MockHttpTransport::new();
        let mut seq = Sequence::new();
        mock.expect_get_json()
            .withf(|url| url == "https://catalog.test/api/creature")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(json!([{ "id": 7, "name": "Embera" }, { "id": 8 }])));
        mock.expect_get_json()
            .withf(|url| url == "https://catalog.test/api/creature/embera")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(json!({
                    "id": 7,
                    "name": "Embera",
                    "types": [{ "name": "fire" }],
                    "special": { "name": "Blaze" }
                }))
            });

        let app = bestiary(mock);
        let entries = app.browse_all().await;
        assert_eq!(app.catalog_summary("").to_string(), "2 of 2 shown");

        let picked = app.search_catalog("emb");
        assert_eq!(picked.len(), 1);
        let key = picked[0].lookup_key().expect("key");

        let record = app.lookup(&key).await.expect("found");
        assert_eq!(record.display_name().as_deref(), Some("EMBERA"));
        assert_eq!(record.types(), ["FIRE"]);
        assert_eq!(record.special().map(|s| s.name()), Some("Blaze"));
        assert_eq!(entries[1].lookup_key().as_deref(), Some("8"));
    }

    #[tokio::test]
    async fn browse_all_survives_an_unreachable_service() {
        init_tracing();

        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .times(2)
            .returning(|_| Err(TransportError::Network("dns failure".into())));

        let app = bestiary(mock);
        assert!(app.browse_all().await.is_empty());
        // Cached as empty; no second round of requests.
        assert!(app.browse_all().await.is_empty());
    }

    #[tokio::test]
    async fn lookup_of_unknown_creature_is_not_found() {
        init_tracing();

        let mut mock = MockHttpTransport::new();
        mock.expect_get_json()
            .times(2)
            .returning(|_| Err(TransportError::Status(404)));

        let err = bestiary(mock).lookup("Ghost").await.expect_err("missing");
        assert_eq!(err, LookupError::not_found("ghost"));
    }
}
