//! Error types for network access and the catalog API.
//!
//! [`FetchError`] describes what went wrong at the transport level (browser
//! fetch, timeouts, HTTP status). [`ApiError`] is what callers of the gateway
//! see: transport failures, upstream not-found, and malformed bodies.

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network request failed (CORS, DNS, connection reset, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// Whether the upstream answered with 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HttpError(404))
    }
}

/// Errors surfaced by the catalog gateway.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network failure or a non-2xx status other than 404.
    #[error("transport error: {0}")]
    Transport(#[source] FetchError),
    /// The named item or category does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),
    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    /// Arguments rejected before any request was made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Classify a transport failure for the resource at `what`.
    pub fn from_fetch(err: FetchError, what: &str) -> Self {
        if err.is_not_found() {
            Self::NotFound(what.to_string())
        } else {
            Self::Transport(err)
        }
    }

    /// Short label for the error kind, used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::NotFound(_) => "not-found",
            Self::Decode(_) => "decode",
            Self::InvalidRequest(_) => "invalid-request",
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
