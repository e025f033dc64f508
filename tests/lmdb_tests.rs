//! Integration tests for the LMDB durable store using the storage test harness.
//!
//! # Requirements
//!
//! - Feature flag `lmdb` must be enabled
//! - No external services needed (LMDB is an embedded database)
//!
//! # Running
//!
//! ```sh
//! cargo test --features lmdb --test lmdb_tests
//! ```
//!
//! # Notes
//!
//! Each test gets a fresh temporary directory via `tempfile::TempDir`, so
//! every environment is fully isolated.

#![cfg(feature = "lmdb")]

#[macro_use]
mod storage_harness;

use reels::config::{ReelsConfig, StorageConfig};
use reels::storage::LmdbDurableStore;
use reels::wishlist::Wishlist;
use std::sync::Arc;
use storage_harness::*;
use tempfile::TempDir;

fn fresh_lmdb_store() -> LmdbDurableStore {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Leak the TempDir so it lives for the duration of the test
    let path = dir.path().to_path_buf();
    std::mem::forget(dir);
    LmdbDurableStore::open(&path).expect("Failed to open LMDB durable store")
}

durable_store_tests!(fresh_lmdb_store());

#[test]
fn test_wishlist_survives_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = LmdbDurableStore::open(dir.path()).unwrap();
        let mut wishlist: Wishlist<TestPick> = Wishlist::new(Arc::new(store), "scout_wishlist");
        wishlist.toggle(pick("t4"));
    }

    let reopened = LmdbDurableStore::open(dir.path()).unwrap();
    let wishlist: Wishlist<TestPick> = Wishlist::new(Arc::new(reopened), "scout_wishlist");
    assert_eq!(wishlist.entries(), &[pick("t4")]);
}

#[test]
fn test_config_opens_lmdb_backend() {
    let dir = TempDir::new().unwrap();
    let yaml = format!(
        "storage:\n  backend: lmdb\n  path: {}\n",
        dir.path().join("reels").display()
    );
    let config = ReelsConfig::from_yaml_str(&yaml).unwrap();
    assert!(matches!(config.storage(), StorageConfig::Lmdb { .. }));

    let store = config.storage().open().unwrap();
    store.write("k", b"[]").unwrap();
    assert_eq!(store.read("k").unwrap(), Some(b"[]".to_vec()));
}
