//! Single-creature lookup use case.
//!
//! Resolves a user query against the catalog API and normalizes whatever
//! payload comes back into a [`CreatureRecord`].

use bestiary_domain::CreatureRecord;
use thiserror::Error;

use crate::infrastructure::normalize::normalize_creature;
use crate::infrastructure::resolver::{EndpointResolver, ResolveError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Blank query, or every candidate endpoint failed.
    #[error("Creature not found: '{query}'")]
    NotFound { query: String },
}

impl LookupError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }
}

impl From<ResolveError> for LookupError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound { query } => Self::NotFound { query },
        }
    }
}

/// Look up one creature by name or id.
pub struct LookupCreature {
    resolver: EndpointResolver,
}

impl LookupCreature {
    pub fn new(resolver: EndpointResolver) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, query: &str) -> Result<CreatureRecord, LookupError> {
        match self.resolver.fetch_entity(query).await? {
            Some(payload) => Ok(normalize_creature(&payload)),
            None => Err(LookupError::not_found(query.trim())),
        }
    }
}
