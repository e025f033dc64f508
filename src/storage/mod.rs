//! Storage implementations for different backends
//!
//! [`DurableStore`] is the capability the wishlist side-store persists
//! through: a small key-value store addressed by well-known string keys. It
//! stands in for browser local storage and is treated as a best-effort cache.

pub mod in_memory;
#[cfg(feature = "lmdb")]
pub mod lmdb;

use crate::core::error::StorageError;

pub use in_memory::{InMemoryDurableStore, InMemoryRecordService};
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbDurableStore;

/// Durable key-value storage capability
///
/// Failures are returned as values; callers decide whether to degrade.
pub trait DurableStore: Send + Sync {
    /// Read the bytes stored under `key`, `None` if nothing is stored
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace whatever is stored under `key`
    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
