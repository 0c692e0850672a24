//! Embedded in-memory correction store.
//!
//! Records are kept in insertion order, which is the stable iteration order
//! the retriever's tie-break relies on. All access goes through a single
//! `RwLock`; per-document writes are therefore serialized, matching the
//! atomicity the [`CorrectionStore`] contract asks for.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::CorrectionRecord;
use crate::storage::errors::StorageError;
use crate::storage::filters::CorrectionFilter;
use crate::storage::traits::CorrectionStore;

/// In-memory correction store for tests and embedded deployments
#[derive(Debug, Default)]
pub struct MemoryCorrectionStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Insertion-ordered records; deletion leaves order of survivors intact
    records: Vec<CorrectionRecord>,

    /// id -> position in `records`
    index: HashMap<String, usize>,
}

impl MemoryCorrectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Inner {
    fn rebuild_index(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.id.clone(), i))
            .collect();
    }
}

#[async_trait]
impl CorrectionStore for MemoryCorrectionStore {
    async fn create_correction(
        &self,
        mut record: CorrectionRecord,
    ) -> Result<CorrectionRecord, StorageError> {
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }

        let mut inner = self.inner.write().await;
        if inner.index.contains_key(&record.id) {
            return Err(StorageError::Operation(format!(
                "Correction {} already exists",
                record.id
            )));
        }

        let pos = inner.records.len();
        inner.index.insert(record.id.clone(), pos);
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn get_correction(&self, id: &str) -> Result<Option<CorrectionRecord>, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .index
            .get(id)
            .map(|&pos| inner.records[pos].clone()))
    }

    async fn delete_correction(&self, id: &str) -> Result<bool, StorageError> {
        let mut inner = self.inner.write().await;
        let Some(&pos) = inner.index.get(id) else {
            return Ok(false);
        };

        inner.records.remove(pos);
        inner.rebuild_index();

        Ok(true)
    }

    async fn list_corrections(
        &self,
        filter: Option<CorrectionFilter>,
        limit: Option<usize>,
    ) -> Result<Vec<CorrectionRecord>, StorageError> {
        let inner = self.inner.read().await;

        let mut results: Vec<CorrectionRecord> = inner
            .records
            .iter()
            .filter(|r| filter.as_ref().is_none_or(|f| f.matches(r)))
            .cloned()
            .collect();

        if let Some(limit) = limit {
            results.truncate(limit);
        }

        Ok(results)
    }

    async fn count_corrections(
        &self,
        filter: Option<CorrectionFilter>,
    ) -> Result<usize, StorageError> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| filter.as_ref().is_none_or(|f| f.matches(r)))
            .count())
    }

    async fn set_embedding(&self, id: &str, embedding: Vec<f32>) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        let Some(&pos) = inner.index.get(id) else {
            return Err(StorageError::NotFound(format!("Correction {}", id)));
        };

        inner.records[pos].embedding = Some(embedding);

        Ok(())
    }

    async fn health_check(&self) -> Result<bool, StorageError> {
        Ok(true)
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut inner = self.inner.write().await;
        inner.records.clear();
        inner.index.clear();
        Ok(())
    }
}
