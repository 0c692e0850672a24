//! Trait definitions for storage components in Relingo

use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::CorrectionRecord;
use crate::storage::errors::StorageError;
use crate::storage::filters::CorrectionFilter;

/// Trait for correction record stores.
///
/// Every operation is atomic at single-document granularity; nothing here
/// spans documents transactionally. Implementations must preserve a stable
/// iteration order for [`list_corrections`](Self::list_corrections) (the
/// retriever's tie-break keys on it).
#[async_trait]
pub trait CorrectionStore: Send + Sync + 'static + Debug {
    /// Create a new correction record.
    ///
    /// When the record's `id` is empty the store assigns one; the stored
    /// record is returned either way.
    async fn create_correction(
        &self,
        record: CorrectionRecord,
    ) -> Result<CorrectionRecord, StorageError>;

    /// Get a correction record by its ID
    async fn get_correction(&self, id: &str) -> Result<Option<CorrectionRecord>, StorageError>;

    /// Delete a correction record by its ID, returning whether it existed
    async fn delete_correction(&self, id: &str) -> Result<bool, StorageError>;

    /// List correction records with optional filtering, in stable store order
    async fn list_corrections(
        &self,
        filter: Option<CorrectionFilter>,
        limit: Option<usize>,
    ) -> Result<Vec<CorrectionRecord>, StorageError>;

    /// Count correction records with optional filtering
    async fn count_corrections(&self, filter: Option<CorrectionFilter>)
    -> Result<usize, StorageError>;

    /// Atomically set the embedding field of a single record.
    ///
    /// Concurrent writers may race here; the overwrite is idempotent for
    /// identical input text, so last-writer-wins is acceptable.
    async fn set_embedding(&self, id: &str, embedding: Vec<f32>) -> Result<(), StorageError>;

    /// Check if the store is healthy and available
    async fn health_check(&self) -> Result<bool, StorageError>;

    /// Clear all data in the store
    async fn clear(&self) -> Result<(), StorageError>;
}
