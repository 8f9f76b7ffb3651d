//! Endpoint resolver - ordered fallback across the catalog API's path families.
//!
//! The API answers on both a singular (`/creature`) and a plural (`/creatures`)
//! path. Candidates are tried strictly in that order; the first usable answer
//! wins and the rest are never contacted. Per-attempt failures are recorded as
//! typed outcomes and logged, never surfaced individually.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::infrastructure::config::ApiConfig;
use crate::infrastructure::ports::{HttpTransport, TransportError};

/// Path families, in priority order.
const CANDIDATE_PATHS: [&str; 2] = ["creature", "creatures"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Every candidate endpoint failed for this query.
    #[error("No endpoint returned creature '{query}'")]
    NotFound { query: String },
}

/// JSON shape a successful attempt must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedShape {
    /// Single-creature lookups.
    Object,
    /// Whole-catalog listings.
    Array,
}

impl ExpectedShape {
    fn accepts(self, body: &Value) -> bool {
        match self {
            Self::Object => body.is_object(),
            Self::Array => body.is_array(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Object => "expected a JSON object",
            Self::Array => "expected a JSON array",
        }
    }
}

/// Result of contacting one candidate endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Success(Value),
    Failed(TransportError),
}

/// One entry in a fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointAttempt {
    pub endpoint: Url,
    pub outcome: AttemptOutcome,
}

/// Trim and lower-case a user query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_dot_segment(query: &str) -> bool {
    matches!(query, "." | "..")
}

/// Stateless resolver over the catalog API.
#[derive(Clone)]
pub struct EndpointResolver {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
}

impl EndpointResolver {
    pub fn new(transport: Arc<dyn HttpTransport>, config: &ApiConfig) -> Self {
        Self {
            transport,
            base_url: config.base_url().clone(),
        }
    }

    /// Candidate URLs for a single creature, query escaped as a path segment.
    ///
    /// Empty for `.` and `..`: URL parsing resolves those segments, escaped or
    /// not, so no URL can carry them to the server.
    pub fn entity_endpoints(&self, query: &str) -> Vec<Url> {
        if is_dot_segment(query) {
            return Vec::new();
        }
        CANDIDATE_PATHS
            .into_iter()
            .map(|path| self.endpoint(&[path, query]))
            .collect()
    }

    /// Candidate URLs for the whole catalog.
    pub fn catalog_endpoints(&self) -> Vec<Url> {
        CANDIDATE_PATHS
            .into_iter()
            .map(|path| self.endpoint(&[path]))
            .collect()
    }

    /// Fetch the raw payload for one creature.
    ///
    /// Returns `Ok(None)` without touching the network when the query is blank.
    pub async fn fetch_entity(&self, raw_query: &str) -> Result<Option<Value>, ResolveError> {
        let query = normalize_query(raw_query);
        if query.is_empty() {
            return Ok(None);
        }

        let attempts = self
            .run_chain(self.entity_endpoints(&query), ExpectedShape::Object)
            .await;

        match first_success(attempts) {
            Some(payload) => Ok(Some(payload)),
            None => {
                tracing::warn!(query = %query, "All creature endpoints failed");
                Err(ResolveError::NotFound { query })
            }
        }
    }

    /// Fetch the whole catalog as raw payload fragments.
    ///
    /// Never fails: when every candidate fails the catalog is empty, which is
    /// indistinguishable from a service that has no creatures.
    pub async fn fetch_catalog(&self) -> Vec<Value> {
        let attempts = self
            .run_chain(self.catalog_endpoints(), ExpectedShape::Array)
            .await;

        match first_success(attempts) {
            Some(Value::Array(entries)) => entries,
            _ => {
                tracing::warn!("All catalog endpoints failed, using an empty catalog");
                Vec::new()
            }
        }
    }

    /// Try `endpoints` in order, stopping after the first success.
    ///
    /// The returned chain holds every attempt that was made; only the last one
    /// can be a success.
    pub async fn run_chain(
        &self,
        endpoints: Vec<Url>,
        shape: ExpectedShape,
    ) -> Vec<EndpointAttempt> {
        let mut attempts = Vec::with_capacity(endpoints.len());

        for endpoint in endpoints {
            let outcome = self.attempt(&endpoint, shape).await;
            let succeeded = matches!(outcome, AttemptOutcome::Success(_));
            attempts.push(EndpointAttempt { endpoint, outcome });
            if succeeded {
                break;
            }
        }

        attempts
    }

    async fn attempt(&self, endpoint: &Url, shape: ExpectedShape) -> AttemptOutcome {
        let outcome = match self.transport.get_json(endpoint.as_str()).await {
            Ok(body) if shape.accepts(&body) => AttemptOutcome::Success(body),
            Ok(_) => AttemptOutcome::Failed(TransportError::invalid_body(shape.describe())),
            Err(e) => AttemptOutcome::Failed(e),
        };

        match &outcome {
            AttemptOutcome::Success(_) => {
                tracing::debug!(endpoint = %endpoint, "Endpoint attempt succeeded");
            }
            AttemptOutcome::Failed(e) => {
                tracing::debug!(
                    endpoint = %endpoint,
                    error = %e,
                    "Endpoint attempt failed, trying next candidate"
                );
            }
        }

        outcome
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // ApiConfig rejects URLs that cannot carry path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

/// The payload of the successful attempt in a chain, if any.
pub fn first_success(attempts: Vec<EndpointAttempt>) -> Option<Value> {
    attempts
        .into_iter()
        .find_map(|attempt| match attempt.outcome {
            AttemptOutcome::Success(body) => Some(body),
            AttemptOutcome::Failed(_) => None,
        })
}
