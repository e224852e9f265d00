//! The playlist manifest: which collections to fetch and where their
//! optional tracklist side tables live.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Top-level manifest file (YAML).
#[derive(Deserialize, Debug)]
pub struct Manifest {
    pub playlists: Vec<PlaylistSpec>,
}

/// One configured playlist.
#[derive(Deserialize, Debug)]
pub struct PlaylistSpec {
    /// Collection path on the API, e.g. `somebody/playlists/late-night-tapes`.
    pub id: String,
    /// Data file stem. Defaults to the last path segment of `id`.
    #[serde(default)]
    pub name: Option<String>,
    /// Optional tracklist side table (JSON). A missing file is tolerated;
    /// a missing path here means the playlist has no tracklists at all.
    #[serde(default)]
    pub tracklists: Option<PathBuf>,
}

impl PlaylistSpec {
    /// File stem for the emitted data file.
    pub fn output_name(&self) -> &str {
        match &self.name {
            Some(name) => name,
            None => self
                .id
                .trim_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(&self.id),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        Self::parse(&raw, path)
    }

    fn parse(raw: &str, path: &Path) -> Result<Self> {
        let manifest: Manifest = serde_yml::from_str(raw)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        if manifest.playlists.is_empty() {
            bail!("manifest {} lists no playlists", path.display());
        }
        let mut seen = std::collections::HashSet::new();
        for spec in &manifest.playlists {
            if spec.id.trim_matches('/').is_empty() {
                bail!("manifest {} has a playlist with an empty id", path.display());
            }
            if !seen.insert(spec.output_name()) {
                bail!(
                    "manifest {} has duplicate output name {:?}; set a distinct `name`",
                    path.display(),
                    spec.output_name()
                );
            }
        }
        Ok(manifest)
    }
}
