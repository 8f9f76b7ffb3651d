//! Process-lifetime cache of the full creature catalog.
//!
//! Filled lazily on first demand, served from memory afterwards. A loaded
//! catalog may be empty; "not fetched yet" is tracked separately from "fetched
//! and empty" so an unreachable service is not retried on every browse.

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;
use tokio::sync::Mutex;

use crate::infrastructure::resolver::EndpointResolver;

#[derive(Default)]
struct CacheState {
    loaded: bool,
    entries: Arc<Vec<Value>>,
}

/// Lazily loaded catalog of raw payload fragments.
pub struct CatalogCache {
    resolver: EndpointResolver,
    state: RwLock<CacheState>,
    /// Held for the duration of a fetch so overlapping loads share one request.
    in_flight: Mutex<()>,
}

impl CatalogCache {
    pub fn new(resolver: EndpointResolver) -> Self {
        Self {
            resolver,
            state: RwLock::new(CacheState::default()),
            in_flight: Mutex::new(()),
        }
    }

    /// Return the cached catalog, fetching it first if needed.
    ///
    /// Concurrent callers that arrive while a fetch is in flight wait for that
    /// fetch instead of issuing their own.
    pub async fn ensure_loaded(&self) -> Arc<Vec<Value>> {
        if let Some(entries) = self.snapshot() {
            tracing::debug!(count = entries.len(), "Catalog cache hit");
            return entries;
        }

        let _guard = self.in_flight.lock().await;

        // Another caller may have finished loading while we waited.
        if let Some(entries) = self.snapshot() {
            return entries;
        }

        let entries = Arc::new(self.resolver.fetch_catalog().await);
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.entries = Arc::clone(&entries);
            state.loaded = true;
        }

        tracing::info!(count = entries.len(), "Catalog cache loaded");
        entries
    }

    /// The cached catalog, or `None` if it has not been loaded.
    pub fn snapshot(&self) -> Option<Arc<Vec<Value>>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.loaded.then(|| Arc::clone(&state.entries))
    }

    pub fn is_loaded(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .loaded
    }

    /// Drop the cached catalog so the next `ensure_loaded` fetches again.
    pub fn invalidate(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = CacheState::default();
        tracing::debug!("Catalog cache invalidated");
    }
}
