//! Harness configuration file.
//!
//! ```toml
//! video_base_url = "https://videos.example.org"
//! catalog_listing = "videos.csv"   # optional; relative to this file
//! initial_cursor = 24301
//!
//! [session]
//! max_diagnosis_suggestions = 3
//! pad_suggestions = true
//! noise_level = 0.2
//! ```
//!
//! Every key is optional. Without a listing, the catalog maps every
//! reachable video id to `{video_base_url}/{id}.mp4`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use dining_kernel::video::catalog::{CatalogError, InMemoryVideoCatalog};
use dining_kernel::video::reachable::required_video_ids;
use dining_suggest::cursor::RngCursor;
use dining_suggest::error::SuggestError;
use dining_suggest::policy::SessionConfig;

/// Base URL used when the configuration names none.
pub const DEFAULT_VIDEO_BASE_URL: &str = "videos";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] SuggestError),
    #[error("video catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub session: SessionConfig,
    pub video_base_url: String,
    /// Comma-separated listing of recorded videos (`id,...,url`).
    pub catalog_listing: Option<PathBuf>,
    pub initial_cursor: u64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            video_base_url: DEFAULT_VIDEO_BASE_URL.to_string(),
            catalog_listing: None,
            initial_cursor: RngCursor::INITIAL.value(),
        }
    }
}

impl HarnessConfig {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] or [`ConfigError::Invalid`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.session.validate()?;
        Ok(config)
    }

    /// Read a configuration file. A relative `catalog_listing` is resolved
    /// against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`HarnessConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        if let (Some(listing), Some(dir)) = (config.catalog_listing.as_mut(), path.parent()) {
            if listing.is_relative() {
                *listing = dir.join(&*listing);
            }
        }
        info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub fn initial_cursor(&self) -> RngCursor {
        RngCursor::new(self.initial_cursor)
    }

    /// The video catalog this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the listing cannot be read, or
    /// [`ConfigError::Catalog`] if it is malformed.
    pub fn build_catalog(&self) -> Result<InMemoryVideoCatalog, ConfigError> {
        let Some(path) = &self.catalog_listing else {
            return Ok(InMemoryVideoCatalog::covering(
                required_video_ids(),
                &self.video_base_url,
            ));
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let catalog = InMemoryVideoCatalog::parse_listing(&text)?;
        info!(path = %path.display(), videos = catalog.len(), "video listing loaded");
        Ok(catalog)
    }
}
