//! Infrastructure implementations.
//!
//! Contains the HTTP transport port and its reqwest adapter, plus the pieces
//! that sit directly on top of it: endpoint fallback, payload normalization and
//! the catalog cache.

pub mod catalog_cache;
pub mod config;
pub mod http;
pub mod normalize;
pub mod ports;
pub mod resolver;
