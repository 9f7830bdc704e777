use std::time::Duration;

use reqwest::StatusCode;
use shot_sorter_core::GameId;

use crate::error::LookupError;
use crate::types::{LookupOutcome, parse_app_details};

pub const DEFAULT_STORE_URL: &str = "https://store.steampowered.com/api/appdetails";

/// Anything that can turn a game ID into a store prediction.
///
/// The resolver only talks to this trait so it can be driven by an
/// in-memory source in tests.
pub trait MetadataSource {
    fn app_details(&self, id: GameId) -> Result<LookupOutcome, LookupError>;
}

/// Blocking client for the Steam store `appdetails` endpoint.
pub struct StoreClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl StoreClient {
    /// Build a client against `base_url`. `timeout` of `None` waits forever.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, LookupError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("shot-sorter/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Rate limiting and server errors carry no usable body; they are reported
/// as retryable malformed responses. Anything else goes to the parser.
fn status_error(status: StatusCode) -> Option<LookupError> {
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Some(LookupError::malformed(format!("HTTP {status}")))
    } else {
        None
    }
}

impl MetadataSource for StoreClient {
    fn app_details(&self, id: GameId) -> Result<LookupOutcome, LookupError> {
        if !id.is_store_app() {
            log::debug!("Game ID {id} is outside the store app range, not querying");
            return Ok(LookupOutcome::NotFound);
        }

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("appids", id.to_string())])
            .send()?;

        let status = resp.status();
        if let Some(err) = status_error(status) {
            return Err(err);
        }

        let text = resp.text()?;
        log::debug!("appdetails {id}: HTTP {status}, {} bytes", text.len());
        parse_app_details(id, &text)
    }
}

#[cfg(test)]
#[path = "tests/client_tests.rs"]
mod tests;
