//! Hand-maintained tracklist overlay for fetched cloudcasts.
//!
//! Mixcloud does not expose per-mix track listings, so the site keeps a
//! JSON side table per playlist, keyed by cloudcast key. The overlay is
//! a pure enrichment step on top of the loader's output; fetching and
//! enrichment stay decoupled.

use std::collections::HashMap;
use std::path::Path;

use mixcloud_api::types::Cloudcast;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reading a tracklist side table.
#[derive(Error, Debug)]
pub enum TracklistError {
    #[error("Failed to read tracklist file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid tracklist file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One row of a hand-entered tracklist.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TracklistEntry {
    pub artist: String,
    pub title: String,
    /// Offset into the mix, as authored (e.g. `"1:02:30"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
}

/// Side table mapping cloudcast keys to their hand-entered tracklists.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(transparent)]
pub struct TracklistTable(HashMap<String, Vec<TracklistEntry>>);

impl TracklistTable {
    /// Reads a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self, TracklistError> {
        let raw = std::fs::read_to_string(path).map_err(|source| TracklistError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| TracklistError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Reads a table, treating a missing file as an empty table.
    ///
    /// Tracklist files are optional: a playlist without one renders
    /// without track listings. A file that exists but cannot be read or
    /// parsed is still an error.
    pub fn load_optional(path: &Path) -> Result<Self, TracklistError> {
        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "no tracklist file, proceeding with an empty table"
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn get(&self, key: &str) -> Option<&[TracklistEntry]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<TracklistEntry>)> for TracklistTable {
    fn from_iter<I: IntoIterator<Item = (String, Vec<TracklistEntry>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A cloudcast paired with its hand-entered tracklist, ready for rendering.
#[derive(Serialize, Debug, Clone)]
pub struct PlaylistItem {
    #[serde(flatten)]
    pub cloudcast: Cloudcast,
    pub tracklist: Vec<TracklistEntry>,
}

/// Overlays tracklists onto fetched items by cloudcast key.
///
/// Pure and order-preserving; items without a table entry get an empty
/// tracklist. Table entries with no matching item are ignored.
pub fn merge_tracklists(items: Vec<Cloudcast>, table: &TracklistTable) -> Vec<PlaylistItem> {
    items
        .into_iter()
        .map(|cloudcast| {
            let tracklist = table
                .get(&cloudcast.key)
                .map(<[TracklistEntry]>::to_vec)
                .unwrap_or_default();
            PlaylistItem {
                cloudcast,
                tracklist,
            }
        })
        .collect()
}
