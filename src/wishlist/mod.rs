//! Selection side-store
//!
//! A [`Wishlist`] is a page-scoped set of record snapshots keyed by record
//! id. It is loaded once from a [`DurableStore`] and written back in full
//! (a JSON array) after every mutation. Storage is a best-effort cache:
//! read failures yield an empty list and write failures are dropped.

use crate::storage::DurableStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// A denormalized copy of a record kept in a wishlist
///
/// Snapshots carry everything another page needs to render them, so a
/// wishlist never has to be joined back against live records.
pub trait WishlistSnapshot: Clone + Serialize + DeserializeOwned + Send + Sync {
    /// Id of the record this snapshot was taken from
    fn id(&self) -> &str;
}

/// Ordered, id-unique collection of snapshots persisted under one key
pub struct Wishlist<S: WishlistSnapshot> {
    store: Arc<dyn DurableStore>,
    key: String,
    entries: Vec<S>,
}

impl<S: WishlistSnapshot> std::fmt::Debug for Wishlist<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wishlist")
            .field("key", &self.key)
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<S: WishlistSnapshot> Wishlist<S> {
    /// Open the wishlist stored under `key`
    pub fn new(store: Arc<dyn DurableStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = load_entries(store.as_ref(), &key);
        Self {
            store,
            key,
            entries,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Snapshots in the order they were added
    pub fn entries(&self) -> &[S] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&S> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Flip membership of the snapshot's id. Returns the new membership.
    ///
    /// When the id is already present the stored entry is removed and the
    /// passed snapshot is discarded.
    pub fn toggle(&mut self, snapshot: S) -> bool {
        let selected = match self.index_of(snapshot.id()) {
            Some(index) => {
                self.entries.remove(index);
                false
            }
            None => {
                self.entries.push(snapshot);
                true
            }
        };
        debug!(key = %self.key, selected, count = self.entries.len(), "wishlist toggled");
        self.persist();
        selected
    }

    /// Remove an entry by id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.entries.remove(index);
        debug!(key = %self.key, id, "wishlist entry removed");
        self.persist();
        true
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Re-read the persisted collection, discarding in-memory state
    pub fn reload(&mut self) {
        self.entries = load_entries(self.store.as_ref(), &self.key);
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    fn persist(&self) {
        let bytes = match serde_json::to_vec(&self.entries) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize wishlist");
                return;
            }
        };

        if let Err(e) = self.store.write(&self.key, &bytes) {
            warn!(key = %self.key, error = %e, "wishlist write dropped");
        }
    }
}

fn load_entries<S: WishlistSnapshot>(store: &dyn DurableStore, key: &str) -> Vec<S> {
    let bytes = match store.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(key, error = %e, "wishlist read failed, starting empty");
            return Vec::new();
        }
    };

    let entries: Vec<S> = match serde_json::from_slice(&bytes) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(key, error = %e, "malformed wishlist payload, starting empty");
            return Vec::new();
        }
    };

    // Ids stay unique even if the payload was edited by hand
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id().to_string()))
        .collect()
}
