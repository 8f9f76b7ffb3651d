//! Bestiary client library.
//!
//! Looks up single creatures and browses the full catalog of a remote creature
//! API, tolerating the API's inconsistent endpoint layout and payload shapes.
//!
//! ## Structure
//!
//! - `infrastructure/` - HTTP transport port + adapter, endpoint fallback,
//!   payload normalization, catalog cache
//! - `use_cases/` - Lookup and catalog browsing
//! - `app` - Composition root handed to a presentation layer

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::Bestiary;
pub use infrastructure::config::{ApiConfig, ConfigError};
pub use use_cases::LookupError;
