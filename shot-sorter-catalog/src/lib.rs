//! Known-games catalog: data model and JSON persistence.
//!
//! The catalog maps device game IDs to a display name and release year.
//! It lives in a single JSON document (`{"games": [...]}`) that is read at
//! the start of every run and rewritten whole when a new game is learned.

pub mod json;
pub mod types;

pub use json::{CatalogError, append_entry, load_catalog, load_catalog_or_default, save_catalog};
pub use types::{Catalog, CatalogEntry};
