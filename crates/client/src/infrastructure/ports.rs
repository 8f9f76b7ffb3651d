//! Port traits for infrastructure boundaries.
//!
//! The HTTP transport is the ONLY abstraction in the client. The resolver, the
//! catalog cache and the use cases are concrete types driven through it, so a
//! test can swap the network for a mock without touching anything else.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Why a single endpoint attempt failed.
///
/// These never escape the resolver; they only decide "try the next candidate"
/// and show up in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(String),
    /// The server answered outside the 2xx range.
    #[error("Unexpected status: {0}")]
    Status(u16),
    /// The body was not JSON, or not the JSON shape the caller needs.
    #[error("Invalid body: {0}")]
    InvalidBody(String),
}

impl TransportError {
    pub fn network(e: impl std::fmt::Display) -> Self {
        Self::Network(e.to_string())
    }

    pub fn invalid_body(e: impl std::fmt::Display) -> Self {
        Self::InvalidBody(e.to_string())
    }
}

/// Issues a GET against a fully-built URL and parses the body as JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}
