//! Error types for the API client.

use std::time::Duration;

/// Errors that can occur when talking to the Mixcloud API.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API rejected the request for exceeding its request-frequency
    /// threshold, signaled by HTTP 429 or a `RateLimitException` payload.
    /// Carries the upstream-suggested wait when one was provided.
    #[error("Rate limited by the Mixcloud API")]
    RateLimited { retry_after: Option<Duration> },
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    /// Network-level failure: DNS, connect, timeout, or a broken read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The response body was not valid JSON for the expected shape.
    #[error("Failed to parse response: {0}")]
    ParseFailed(String),
    /// A request URL could not be parsed. Pagination `next` pointers come
    /// from the wire, so this can surface mid-walk.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
