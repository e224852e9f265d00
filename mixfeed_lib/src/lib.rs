//! Library layer for the playlist site build: paginated Mixcloud fetching
//! with retry and backoff, plus the tracklist overlay applied to the data
//! files the template layer consumes.
//!
//! Wraps the `mixcloud_api` crate; a site build calls
//! [`load_collection`] once per configured playlist and serializes the
//! resulting [`PlaylistData`].

pub mod data;
pub mod loader;
pub mod retry;
pub mod tracklist;

pub use mixcloud_api;
pub use mixcloud_api::types;

pub use data::PlaylistData;
pub use loader::{load_collection, LoaderConfig, PlaylistFetchResult};
pub use retry::RetryPolicy;
pub use tracklist::{
    merge_tracklists, PlaylistItem, TracklistEntry, TracklistError, TracklistTable,
};
