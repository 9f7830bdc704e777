/// Errors that can occur while querying the store.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The body was `null`, not JSON, or not shaped like an appdetails reply.
    /// The store does this transiently, so callers may retry.
    #[error("Malformed store response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    /// Whether waiting and asking again may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::MalformedResponse(_))
    }
}
