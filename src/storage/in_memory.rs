//! In-memory implementations for testing and development

use crate::core::error::StorageError;
use crate::core::{Record, RecordService};
use crate::storage::DurableStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory durable store
///
/// Clones share the same map, so two pages handed clones of one store see
/// each other's writes, like two tabs sharing browser storage. An optional
/// per-value quota mimics the browser's storage limit.
#[derive(Clone, Default)]
pub struct InMemoryDurableStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    quota: Option<usize>,
}

impl InMemoryDurableStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects values larger than `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }
}

impl DurableStore for InMemoryDurableStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let entries = self.entries.read().map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        if let Some(limit) = self.quota.filter(|limit| bytes.len() > *limit) {
            return Err(StorageError::TooLarge {
                key: key.to_string(),
                size: bytes.len(),
                limit,
            });
        }

        let mut entries = self.entries.write().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        entries.insert(key.to_string(), bytes.to_vec());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        entries.remove(key);

        Ok(())
    }
}

/// In-memory record service implementation
///
/// Keeps insertion order so `list` returns records in the order they were
/// created, like a literal mock array.
#[derive(Clone)]
pub struct InMemoryRecordService<T: Record> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Record> InMemoryRecordService<T> {
    /// Create a new empty service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a service seeded with `records`; later duplicates replace earlier ones
    pub fn seeded(records: impl IntoIterator<Item = T>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.id().to_string(), r))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }
}

impl<T: Record> Default for InMemoryRecordService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordService<T> for InMemoryRecordService<T> {
    async fn create(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.contains_key(record.id()) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::record_type(),
                record.id()
            ));
        }
        records.insert(record.id().to_string(), record.clone());

        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }

    async fn update(&self, id: &str, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = records
            .get_mut(id)
            .ok_or_else(|| anyhow!("{} not found: {}", T::record_type(), id))?;
        *slot = record.clone();

        Ok(record)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        records.shift_remove(id);

        Ok(())
    }
}
