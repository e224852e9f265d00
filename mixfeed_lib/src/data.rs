//! The per-playlist data file handed to the template layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::loader::PlaylistFetchResult;
use crate::tracklist::{merge_tracklists, PlaylistItem, TracklistTable};

/// Serialized shape of one playlist data file: the fetch result with the
/// tracklist overlay applied. Templates branch on `failure` to render
/// the populated, empty, or unable-to-load state.
#[derive(Serialize, Debug)]
pub struct PlaylistData {
    pub collection_id: String,
    pub items: Vec<PlaylistItem>,
    pub item_count: usize,
    pub fetched_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl PlaylistData {
    /// Applies the tracklist overlay to a fetch result.
    ///
    /// A failed result stays empty whatever the table contains, so the
    /// "failure implies no items" invariant survives enrichment.
    pub fn from_result(result: PlaylistFetchResult, table: &TracklistTable) -> Self {
        let PlaylistFetchResult {
            collection_id,
            items,
            item_count,
            fetched_at,
            failure,
        } = result;
        Self {
            collection_id,
            items: merge_tracklists(items, table),
            item_count,
            fetched_at,
            failure,
        }
    }
}
