//! Bestiary domain types.
//!
//! Strict vocabulary for creatures fetched from the remote catalog. Nothing in
//! here performs I/O or sees raw JSON; loosely-shaped payloads are normalized
//! into these types by the client's infrastructure layer.

pub mod catalog;
pub mod creature;
pub mod error;
pub mod stats;

pub use catalog::{filter_catalog, CatalogEntry, CatalogFilter, CatalogSummary};
pub use creature::{CreatureRecord, SpecialAbility};
pub use error::DomainError;
pub use stats::{StatBlock, StatKind};
