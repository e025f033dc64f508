//! LMDB durable store using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded key-value store, so it needs no server and all
//! operations are synchronous. This backend keeps wishlist payloads on disk
//! across process restarts, the way browser local storage survives reloads.
//!
//! # Databases (named LMDB sub-databases)
//!
//! - `durable`: well-known key → raw payload bytes
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use crate::core::error::StorageError;
use crate::storage::DurableStore;
use heed::types::{Bytes, Str};
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

/// LMDB-backed implementation of [`DurableStore`].
///
/// The `Env` is wrapped in an `Arc` so handles can be cloned across pages.
///
/// # Example
///
/// ```rust,ignore
/// use reels::storage::LmdbDurableStore;
///
/// let store = LmdbDurableStore::open("/tmp/reels-lmdb")?;
/// store.write("scout_wishlist", b"[]")?;
/// ```
#[derive(Clone)]
pub struct LmdbDurableStore {
    env: Arc<Env>,
    db: Database<Str, Bytes>,
}

impl LmdbDurableStore {
    /// Open (or create) an LMDB environment at `path` with the default 16 MB map
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open_with_map_size(path, 16 * 1024 * 1024)
    }

    /// Open with an explicit map size; LMDB only reserves address space
    pub fn open_with_map_size(path: impl AsRef<Path>, map_size: usize) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let open_err = |e: &dyn std::fmt::Display| StorageError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        std::fs::create_dir_all(path).map_err(|e| open_err(&e))?;

        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(4)
                .open(path)
                .map_err(|e| open_err(&e))?
        };

        let mut wtxn = env.write_txn().map_err(|e| open_err(&e))?;
        let db: Database<Str, Bytes> = env
            .create_database(&mut wtxn, Some("durable"))
            .map_err(|e| open_err(&e))?;
        wtxn.commit().map_err(|e| open_err(&e))?;

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }
}

impl DurableStore for LmdbDurableStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let read_err = |e: heed::Error| StorageError::Read {
            key: key.to_string(),
            message: e.to_string(),
        };

        let rtxn = self.env.read_txn().map_err(read_err)?;
        let value = self.db.get(&rtxn, key).map_err(read_err)?;
        Ok(value.map(<[u8]>::to_vec))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let write_err = |e: heed::Error| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        };

        let mut wtxn = self.env.write_txn().map_err(write_err)?;
        self.db.put(&mut wtxn, key, bytes).map_err(write_err)?;
        wtxn.commit().map_err(write_err)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let write_err = |e: heed::Error| StorageError::Write {
            key: key.to_string(),
            message: e.to_string(),
        };

        let mut wtxn = self.env.write_txn().map_err(write_err)?;
        self.db.delete(&mut wtxn, key).map_err(write_err)?;
        wtxn.commit().map_err(write_err)?;
        Ok(())
    }
}
