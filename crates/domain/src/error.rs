//! Error types for the domain layer

use thiserror::Error;

/// Error type for domain value parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stat name that is not one of the six canonical keys
    #[error("Unknown stat: {0}")]
    UnknownStat(String),
    /// A special ability with neither a name nor a description
    #[error("Special ability needs a name or a description")]
    EmptySpecialAbility,
}

impl DomainError {
    pub fn unknown_stat(name: impl Into<String>) -> Self {
        Self::UnknownStat(name.into())
    }
}
