//! HTTP client for the Mixcloud public API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{
    types::{Cloudcast, Page},
    Error,
};

/// Request timeout for Mixcloud API calls (seconds).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Items requested per page. The API caps this at 100.
const PAGE_LIMIT: u32 = 100;

/// HTTP client for the Mixcloud public API.
///
/// Holds a single `reqwest::Client` with a 30-second timeout. Does no
/// retrying itself; callers layer their own retry policy on top.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.mixcloud.com`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Mixcloud API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://api.mixcloud.com")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the first page of cloudcasts for a collection.
    ///
    /// `collection_id` is the API path of the collection, e.g.
    /// `somebody/playlists/late-night-tapes`.
    pub fn cloudcasts_url(&self, collection_id: &str) -> String {
        format!(
            "{}/{}/cloudcasts/?limit={}",
            self.base_api_url,
            collection_id.trim_matches('/'),
            PAGE_LIMIT
        )
    }

    /// Fetches one page of cloudcasts from an absolute URL, either the
    /// first page from [`cloudcasts_url`](Self::cloudcasts_url) or a
    /// `paging.next` pointer from a previous page.
    pub async fn get_cloudcast_page(&self, url: &str) -> Result<Page<Cloudcast>, Error> {
        self.get(url).await
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let url = Url::parse(url).map_err(|e| {
            tracing::error!("Invalid URL {}: {}", url, e);
            Error::InvalidUrl(e.to_string())
        })?;
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(Error::Network)?;

        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            return Err(Error::RateLimited { retry_after });
        }

        let body = resp.text().await.map_err(Error::Network)?;

        if !status.is_success() {
            // Mixcloud also signals rate limiting through an error payload
            // on a non-429 status.
            if let Some(retry_after) = rate_limit_payload(&body) {
                return Err(Error::RateLimited { retry_after });
            }
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })?;

        Ok(parsed)
    }
}

/// Error envelope the API wraps failures in, e.g.
/// `{"error": {"type": "RateLimitException", "retry_after": 300}}`.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    #[serde(rename = "type")]
    kind: Option<String>,
    retry_after: Option<u64>,
}

/// Returns the suggested wait when `body` is a rate-limit error payload.
fn rate_limit_payload(body: &str) -> Option<Option<Duration>> {
    let envelope = serde_json::from_str::<ErrorEnvelope>(body).ok()?;
    if envelope.error.kind.as_deref() == Some("RateLimitException") {
        Some(envelope.error.retry_after.map(Duration::from_secs))
    } else {
        None
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Cut on a char boundary at or below MAX; slicing mid-character
        // would panic on multibyte bodies.
        let end = (0..=MAX)
            .rev()
            .find(|&i| body.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloudcasts_url_joins_base_and_collection() {
        let client = Client::with_base_url("https://api.mixcloud.com/").unwrap();
        assert_eq!(
            client.cloudcasts_url("somebody/playlists/late-night-tapes"),
            "https://api.mixcloud.com/somebody/playlists/late-night-tapes/cloudcasts/?limit=100"
        );
    }

    #[test]
    fn cloudcasts_url_trims_stray_slashes() {
        let client = Client::with_base_url("http://localhost:9999").unwrap();
        assert_eq!(
            client.cloudcasts_url("/somebody/playlists/tape/"),
            "http://localhost:9999/somebody/playlists/tape/cloudcasts/?limit=100"
        );
    }

    #[test]
    fn rate_limit_payload_detected() {
        let body = r#"{"error": {"type": "RateLimitException", "message": "slow down", "retry_after": 300}}"#;
        assert_eq!(
            rate_limit_payload(body),
            Some(Some(Duration::from_secs(300)))
        );
    }

    #[test]
    fn rate_limit_payload_ignores_other_errors() {
        let body = r#"{"error": {"type": "ResourceNotFound", "message": "gone"}}"#;
        assert_eq!(rate_limit_payload(body), None);
    }

    #[test]
    fn rate_limit_payload_ignores_non_json() {
        assert_eq!(rate_limit_payload("<html>502</html>"), None);
    }

    #[test]
    fn truncate_body_short_passthrough() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_cuts_long_bodies() {
        let body = "a".repeat(3000);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(snippet.len(), 2000 + "...[truncated]".len());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // A multibyte character straddling the cut point must not panic.
        let mut body = "a".repeat(1999);
        body.push('€');
        body.push_str(&"b".repeat(500));
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert!(snippet.starts_with(&"a".repeat(1999)));
        assert!(!snippet.contains('€'));
    }
}
