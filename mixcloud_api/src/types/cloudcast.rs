use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry within a playlist: a single audio mix and its metadata.
///
/// The loader never interprets these fields; they pass through to the
/// rendering layer as-is.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cloudcast {
    /// Stable unique key, e.g. `/somebody/late-night-tape-3/`.
    pub key: String,

    pub name: String,

    /// Canonical public URL of the mix.
    pub url: String,

    pub slug: Option<String>,

    pub created_time: DateTime<Utc>,

    /// Duration in seconds.
    pub audio_length: i64,

    #[serde(default)]
    pub play_count: Option<i64>,

    #[serde(default)]
    pub favorite_count: Option<i64>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub pictures: Option<Pictures>,

    #[serde(default)]
    pub user: Option<User>,
}

/// Genre label attached to a cloudcast.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Tag {
    pub key: Option<String>,
    pub name: String,
    pub url: Option<String>,
}

/// Artwork renditions by size. Only the sizes the site uses are kept.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Pictures {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub extra_large: Option<String>,
    #[serde(rename = "1024wx1024h")]
    pub square_1024: Option<String>,
}

/// The account that published a cloudcast.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub key: String,
    pub name: String,
    pub username: String,
    pub url: Option<String>,
}
