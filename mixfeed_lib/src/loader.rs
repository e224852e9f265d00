//! Paginated fetch of a full playlist, tolerant of upstream failures.
//!
//! The loader walks the cloudcast listing of one collection page by
//! page, retrying each page through [`retry::with_retry`], and always
//! hands back a [`PlaylistFetchResult`]. A build that cannot reach the
//! API gets a failure-carrying result, never an error: one broken
//! collection must not break the site build.

use std::time::Duration;

use chrono::{DateTime, Utc};
use mixcloud_api::{types::Cloudcast, Client, Error};
use serde::Serialize;
use tokio::time::sleep;

use crate::retry::{self, RetryPolicy};

/// Ceiling on pages walked per collection. Guards against a malformed
/// or cyclic `next` pointer; hitting it is a soft stop, not a failure.
const DEFAULT_MAX_PAGES: u32 = 100;

/// Pause between page requests, to stay clear of the upstream rate limit.
const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(200);

/// Knobs for one collection walk.
#[derive(Debug, Clone, Copy)]
pub struct LoaderConfig {
    pub retry: RetryPolicy,
    pub max_pages: u32,
    pub page_delay: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            max_pages: DEFAULT_MAX_PAGES,
            page_delay: DEFAULT_PAGE_DELAY,
        }
    }
}

/// Everything fetched for one collection, plus fetch metadata.
///
/// `failure` present means the fetch could not complete: `items` is then
/// empty and `item_count` zero. Partial data is never returned on error.
#[derive(Debug, Serialize)]
pub struct PlaylistFetchResult {
    pub collection_id: String,
    pub items: Vec<Cloudcast>,
    pub item_count: usize,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl PlaylistFetchResult {
    fn success(collection_id: &str, items: Vec<Cloudcast>) -> Self {
        Self {
            collection_id: collection_id.to_string(),
            item_count: items.len(),
            items,
            fetched_at: Utc::now(),
            failure: None,
        }
    }

    fn failed(collection_id: &str, failure: String) -> Self {
        Self {
            collection_id: collection_id.to_string(),
            items: Vec::new(),
            item_count: 0,
            fetched_at: Utc::now(),
            failure: Some(failure),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Fetches every cloudcast in `collection_id`, following pagination.
///
/// Pages are requested strictly in order, with `config.page_delay`
/// between them, and each page is retried per `config.retry`. Never
/// returns an error; an unrecovered upstream failure is reported through
/// the `failure` field with an empty item list.
pub async fn load_collection(
    client: &Client,
    collection_id: &str,
    config: &LoaderConfig,
) -> PlaylistFetchResult {
    match fetch_all_pages(client, collection_id, config).await {
        Ok(items) => {
            tracing::info!(
                collection = collection_id,
                items = items.len(),
                "collection loaded"
            );
            PlaylistFetchResult::success(collection_id, items)
        }
        Err(err) => {
            tracing::error!(
                collection = collection_id,
                error = %err,
                "collection failed to load, emitting empty result"
            );
            PlaylistFetchResult::failed(collection_id, err.to_string())
        }
    }
}

async fn fetch_all_pages(
    client: &Client,
    collection_id: &str,
    config: &LoaderConfig,
) -> Result<Vec<Cloudcast>, Error> {
    let mut items: Vec<Cloudcast> = Vec::new();
    let mut cursor = Some(client.cloudcasts_url(collection_id));
    let mut pages = 0u32;

    while let Some(url) = cursor.take() {
        if pages >= config.max_pages {
            tracing::warn!(
                collection = collection_id,
                pages,
                "page ceiling reached, stopping pagination"
            );
            break;
        }

        let page = retry::with_retry(&config.retry, || client.get_cloudcast_page(&url)).await?;
        pages += 1;
        tracing::debug!(
            collection = collection_id,
            page = pages,
            items = page.data.len(),
            "page fetched"
        );

        cursor = page.next_url().map(str::to_string);
        items.extend(page.data);

        if cursor.is_some() {
            sleep(config.page_delay).await;
        }
    }

    Ok(items)
}
