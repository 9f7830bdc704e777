use std::collections::HashMap;

use serde::Deserialize;
use shot_sorter_core::{GameFolder, GameId};

use crate::error::LookupError;
use crate::sanitize::{extract_year, sanitize_name};

/// One value of the top-level appdetails map, keyed by stringified app ID.
#[derive(Debug, Deserialize)]
pub struct AppDetailsEnvelope {
    #[serde(default)]
    pub success: bool,
    /// Kept loose: the store sends `[]` here for some failures.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<ReleaseDate>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseDate {
    #[serde(default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub date: String,
}

/// A name and year guessed from the store, already sanitized for use as a
/// directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub name: String,
    pub year: Option<u32>,
}

impl Prediction {
    pub fn new(name: impl Into<String>, year: Option<u32>) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }

    /// Both a name and a release year are known.
    pub fn is_complete(&self) -> bool {
        self.year.is_some()
    }

    /// Folder for this prediction; an unknown year is stored as `0`.
    pub fn folder(&self) -> GameFolder {
        GameFolder::new(self.name.clone(), self.year.unwrap_or(0))
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.folder().dir_name())
    }
}

/// Result of a lookup that reached the store and got a usable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(Prediction),
    /// The store answered `success: false` or had no usable name.
    NotFound,
}

/// Interpret an appdetails response body for `id`.
///
/// A `null` body, non-JSON, or a map without `id` is a
/// [`LookupError::MalformedResponse`].
pub fn parse_app_details(id: GameId, body: &str) -> Result<LookupOutcome, LookupError> {
    let parsed: Option<HashMap<String, AppDetailsEnvelope>> = serde_json::from_str(body)
        .map_err(|e| {
            let excerpt: String = body.chars().take(200).collect();
            LookupError::malformed(format!("{e}. Response: {excerpt}"))
        })?;
    let mut map = parsed.ok_or_else(|| LookupError::malformed("null body"))?;
    let envelope = map
        .remove(&id.to_string())
        .ok_or_else(|| LookupError::malformed(format!("no entry for app {id}")))?;

    if !envelope.success {
        return Ok(LookupOutcome::NotFound);
    }
    let data = envelope
        .data
        .ok_or_else(|| LookupError::malformed(format!("app {id} reported success without data")))?;
    let data: AppData = serde_json::from_value(data)
        .map_err(|e| LookupError::malformed(format!("app {id} data: {e}")))?;

    let name = data.name.as_deref().map(sanitize_name).unwrap_or_default();
    if name.is_empty() {
        return Ok(LookupOutcome::NotFound);
    }
    let year = data
        .release_date
        .as_ref()
        .and_then(|rd| extract_year(&rd.date));

    Ok(LookupOutcome::Found(Prediction::new(name, year)))
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
