//! Network fetching with timeout support.
//!
//! Requests go through `gloo-net` and are raced against a `gloo-timers`
//! timeout, so a stalled connection surfaces as [`FetchError::Timeout`]
//! instead of hanging the page load forever.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Result of racing a request against a timeout.
#[derive(Debug)]
pub enum RaceResult<T> {
    /// The request finished before the timeout.
    Completed(T),
    /// Timeout occurred before the request finished.
    TimedOut,
}

/// Race a future against a timeout.
pub async fn race_with_timeout<F>(fut: F, timeout_ms: u32) -> RaceResult<F::Output>
where
    F: Future,
{
    let fut = Box::pin(fut);
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match future::select(fut, timeout).await {
        Either::Left((output, _)) => RaceResult::Completed(output),
        Either::Right(_) => RaceResult::TimedOut,
    }
}

/// Fetch the body of `url` as text.
///
/// Non-2xx responses become [`FetchError::HttpError`] carrying the status,
/// so callers can tell a 404 apart from other failures.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let send = Request::get(url).send();

    let resp = match race_with_timeout(send, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Completed(result) => {
            result.map_err(|e| FetchError::NetworkError(e.to_string()))?
        }
    };

    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }

    resp.text().await.map_err(|_| FetchError::ResponseReadFailed)
}
