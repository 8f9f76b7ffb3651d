//! User-facing operations over the catalog API.

mod catalog;
mod lookup;

pub use catalog::BrowseCatalog;
pub use lookup::{LookupCreature, LookupError};
