//! Service trait for the persistence collaborator

use crate::core::Record;
use anyhow::Result;
use async_trait::async_trait;

/// CRUD access to a record collection held by the backend
///
/// Pages only call [`RecordService::list`] when they mount; the mutating
/// operations back the add/edit/remove actions of the Presentation Layer.
/// The crate is agnostic to the backend behind this trait.
#[async_trait]
pub trait RecordService<T: Record>: Send + Sync {
    /// Create a new record
    async fn create(&self, record: T) -> Result<T>;

    /// Get a record by id
    async fn get(&self, id: &str) -> Result<Option<T>>;

    /// List all records
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace an existing record
    async fn update(&self, id: &str, record: T) -> Result<T>;

    /// Delete a record
    async fn delete(&self, id: &str) -> Result<()>;
}
