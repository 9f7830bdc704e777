//! Steam store metadata lookups.
//!
//! Resolves a numeric app ID to a predicted game name and release year via
//! the public `appdetails` endpoint, with the name cleaned up so it can be
//! used as a directory name.

pub mod client;
pub mod error;
pub mod sanitize;
pub mod types;

pub use client::{DEFAULT_STORE_URL, MetadataSource, StoreClient};
pub use error::LookupError;
pub use sanitize::{extract_year, sanitize_name};
pub use types::{LookupOutcome, Prediction, parse_app_details};
