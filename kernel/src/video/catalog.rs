//! The catalog of recorded videos.
//!
//! A missing entry means the transition was never recorded, so it cannot be
//! shown. Callers treat that like a refused action.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::digest::{canonical_hash, ContentHash, HashDomain};

/// Lookup from video id to a playable URL.
pub trait VideoCatalog: Send + Sync {
    /// The URL of `video_id`, or `None` if it was never recorded.
    fn url_for(&self, video_id: &str) -> Option<&str>;
}

/// Failure building or snapshotting a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A listing row could not be read.
    #[error("catalog line {line}: {detail}")]
    MalformedRow { line: usize, detail: String },
    /// The same video id was listed twice.
    #[error("duplicate catalog entry for {id}")]
    DuplicateId { id: String },
    /// The catalog could not be serialized for hashing.
    #[error("catalog encoding failed: {detail}")]
    Encoding { detail: String },
}

/// A catalog held in memory, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryVideoCatalog {
    entries: BTreeMap<String, String>,
}

impl InMemoryVideoCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, url)` rows.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if an id repeats.
    pub fn from_rows<I, K, V>(rows: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut catalog = Self::new();
        for (id, url) in rows {
            catalog.insert(id.into(), url.into())?;
        }
        Ok(catalog)
    }

    /// Parse a comma-separated listing. The first column is the video id and
    /// the last column is the URL. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedRow`] for a row with fewer than two
    /// columns or an empty id/URL, and [`CatalogError::DuplicateId`] for a
    /// repeated id.
    pub fn parse_listing(text: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let columns: Vec<&str> = line.split(',').map(str::trim).collect();
            let (Some(id), Some(url)) = (columns.first(), columns.last()) else {
                continue;
            };
            if columns.len() < 2 || id.is_empty() || url.is_empty() {
                return Err(CatalogError::MalformedRow {
                    line: index + 1,
                    detail: format!("expected `id,...,url`, got {line:?}"),
                });
            }
            catalog.insert((*id).to_string(), (*url).to_string())?;
        }
        Ok(catalog)
    }

    /// A catalog with one entry per id at `<base_url>/<id>.mp4`.
    #[must_use]
    pub fn covering<I, S>(ids: I, base_url: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let base = base_url.trim_end_matches('/');
        let entries = ids
            .into_iter()
            .map(|id| {
                let id = id.into();
                let url = format!("{base}/{id}.mp4");
                (id, url)
            })
            .collect();
        Self { entries }
    }

    /// Add one entry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if `id` is already present.
    pub fn insert(&mut self, id: String, url: String) -> Result<(), CatalogError> {
        if self.entries.contains_key(&id) {
            return Err(CatalogError::DuplicateId { id });
        }
        self.entries.insert(id, url);
        Ok(())
    }

    /// Drop an entry, returning its URL.
    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.entries.remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in `required` that have no entry, in input order.
    #[must_use]
    pub fn missing<'a, I>(&self, required: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        required
            .into_iter()
            .filter(|id| !self.entries.contains_key(*id))
            .collect()
    }

    /// Digest of the catalog's compact JSON form (keys sorted by id).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Encoding`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CatalogError> {
        let bytes = serde_json::to_vec(&self.entries).map_err(|e| CatalogError::Encoding {
            detail: e.to_string(),
        })?;
        Ok(canonical_hash(HashDomain::VideoCatalog, &bytes))
    }
}

impl VideoCatalog for InMemoryVideoCatalog {
    fn url_for(&self, video_id: &str) -> Option<&str> {
        self.entries.get(video_id).map(String::as_str)
    }
}
