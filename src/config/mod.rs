//! Configuration loading and management
//!
//! ```yaml
//! storage:
//!   backend: lmdb
//!   path: /var/lib/reels
//! wishlists:
//!   scout_wishlist: scout_wishlist
//!   transfer_watchlist: transfer_watchlist
//!   ai_shortlist: ai_shortlist
//! default_sorts:
//!   explore: potential
//!   transfers: value
//! ```

use crate::core::auth::Page;
use crate::core::error::{ConfigError, ReelsError};
use crate::core::sort::SortMode;
use crate::engine::ListingLayout;
use crate::storage::{DurableStore, InMemoryDurableStore};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Where wishlist payloads are persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Process-local map, lost on exit
    #[default]
    Memory,

    /// LMDB environment on disk (requires the `lmdb` feature)
    Lmdb {
        path: String,

        /// Map size in bytes
        #[serde(default, skip_serializing_if = "Option::is_none")]
        map_size: Option<usize>,
    },
}

impl StorageConfig {
    /// Open the configured durable store
    pub fn open(&self) -> Result<Arc<dyn DurableStore>, ReelsError> {
        match self {
            StorageConfig::Memory => Ok(Arc::new(InMemoryDurableStore::new())),
            StorageConfig::Lmdb { path, map_size } => open_lmdb(path, *map_size),
        }
    }
}

#[cfg(feature = "lmdb")]
fn open_lmdb(path: &str, map_size: Option<usize>) -> Result<Arc<dyn DurableStore>, ReelsError> {
    use crate::storage::LmdbDurableStore;

    let store = match map_size {
        Some(size) => LmdbDurableStore::open_with_map_size(path, size)?,
        None => LmdbDurableStore::open(path)?,
    };
    tracing::debug!(path, "opened lmdb durable store");
    Ok(Arc::new(store))
}

#[cfg(not(feature = "lmdb"))]
fn open_lmdb(path: &str, _map_size: Option<usize>) -> Result<Arc<dyn DurableStore>, ReelsError> {
    Err(ConfigError::InvalidValue {
        field: "storage.backend".to_string(),
        value: "lmdb".to_string(),
        message: format!("cannot open '{}': built without the `lmdb` feature", path),
    }
    .into())
}

/// Durable-store keys of the wishlist collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WishlistKeys {
    /// Talents saved from the explore page
    pub scout_wishlist: String,

    /// Listings watched on the transfer marketplace
    pub transfer_watchlist: String,

    /// Recommendations shortlisted from AI scouting
    pub ai_shortlist: String,
}

impl Default for WishlistKeys {
    fn default() -> Self {
        Self {
            scout_wishlist: "scout_wishlist".to_string(),
            transfer_watchlist: "transfer_watchlist".to_string(),
            ai_shortlist: "ai_shortlist".to_string(),
        }
    }
}

/// Complete configuration of the application
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReelsConfig {
    /// Durable storage backend; memory when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,

    /// Wishlist keys; the well-known defaults when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wishlists: Option<WishlistKeys>,

    /// Per-page default sort overrides (page -> sort mode)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub default_sorts: IndexMap<Page, SortMode>,
}

impl ReelsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::parse(&content, Some(path.display().to_string()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Self::parse(yaml, None)
    }

    fn parse(yaml: &str, file: Option<String>) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file,
            message: e.to_string(),
        })
    }

    /// Layer several configurations; later ones win field by field and
    /// sort overrides are combined
    pub fn merge(configs: Vec<ReelsConfig>) -> Self {
        configs
            .into_iter()
            .fold(ReelsConfig::default(), |mut merged, config| {
                if config.storage.is_some() {
                    merged.storage = config.storage;
                }
                if config.wishlists.is_some() {
                    merged.wishlists = config.wishlists;
                }
                merged.default_sorts.extend(config.default_sorts);
                merged
            })
    }

    pub fn storage(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    pub fn wishlist_keys(&self) -> WishlistKeys {
        self.wishlists.clone().unwrap_or_default()
    }

    /// Apply the configured default sort for `page`.
    ///
    /// An override naming a mode the layout does not register is ignored
    /// with a warning and the layout's own default is kept.
    pub fn layout_for(&self, page: Page, layout: ListingLayout) -> ListingLayout {
        let Some(mode) = self.default_sorts.get(&page) else {
            return layout;
        };

        if layout.comparators.contains(mode) {
            layout.with_default_sort(mode.clone())
        } else {
            warn!(?page, mode = %mode, "ignoring unknown default sort override");
            layout
        }
    }
}
