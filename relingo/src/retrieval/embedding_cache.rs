//! Lazy embedding cache backed by the correction store.
//!
//! Corrections are stored without embeddings; vectors are computed on first
//! use and written back so subsequent requests read them from the record.
//! The write-back is idempotent for unchanged text, so concurrent fills of
//! the same record are harmless (last writer wins with an identical vector).

use std::sync::Arc;
use tracing::{debug, warn};

use crate::Result;
use crate::models::CorrectionRecord;
use crate::providers::TextEmbedder;
use crate::storage::{CorrectionFilter, CorrectionStore};

/// Ensures correction records carry embeddings, computing and persisting
/// them on demand.
#[derive(Clone)]
pub struct EmbeddingCache {
    store: Arc<dyn CorrectionStore>,
    embedder: Arc<dyn TextEmbedder>,
}

impl EmbeddingCache {
    pub fn new(store: Arc<dyn CorrectionStore>, embedder: Arc<dyn TextEmbedder>) -> Self {
        Self { store, embedder }
    }

    /// Embed free-form query text.
    ///
    /// Returns `None` when the embedder declines the input (blank text).
    /// Query embeddings are never persisted.
    pub async fn embed_query(&self, text: &str) -> Result<Option<Vec<f32>>> {
        Ok(self.embedder.embed(text).await?)
    }

    /// Return the record's embedding, computing and persisting it if absent.
    ///
    /// Returns `None` when the record cannot be embedded (blank original or
    /// an embedder that declines it). A failed write-back is logged and
    /// tolerated: the vector is still returned for this request and the next
    /// request recomputes it.
    pub async fn ensure_embedding(&self, record: &CorrectionRecord) -> Result<Option<Vec<f32>>> {
        if let Some(embedding) = &record.embedding {
            return Ok(Some(embedding.clone()));
        }

        let Some(embedding) = self.embedder.embed(&record.original).await? else {
            return Ok(None);
        };

        debug!(id = %record.id, "computed embedding for correction");

        if let Err(e) = self.store.set_embedding(&record.id, embedding.clone()).await {
            warn!(id = %record.id, error = %e, "failed to persist correction embedding");
        }

        Ok(Some(embedding))
    }

    /// Embed every stored record that lacks a vector, regardless of status.
    ///
    /// Returns the number of records that received an embedding. Per-record
    /// failures (embedder errors, unembeddable text, failed write-backs) are
    /// logged and skipped; the sweep always runs to completion.
    pub async fn reindex_all(&self) -> Result<usize> {
        let missing = self
            .store
            .list_corrections(Some(CorrectionFilter::default().with_embedding(false)), None)
            .await?;

        let mut embedded = 0;
        for record in missing {
            match self.embedder.embed(&record.original).await {
                Ok(Some(embedding)) => {
                    match self.store.set_embedding(&record.id, embedding).await {
                        Ok(()) => embedded += 1,
                        Err(e) => {
                            warn!(id = %record.id, error = %e,
                                "failed to persist embedding during reindex");
                        }
                    }
                }
                Ok(None) => {
                    warn!(id = %record.id, "skipping unembeddable correction during reindex");
                }
                Err(e) => {
                    warn!(id = %record.id, error = %e, "embedding failed during reindex");
                }
            }
        }

        debug!(embedded, "reindex complete");
        Ok(embedded)
    }
}

impl std::fmt::Debug for EmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingCache")
            .field("dimensions", &self.embedder.dimensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::DeterministicEmbedder;
    use crate::storage::MemoryCorrectionStore;

    fn cache_with_store() -> (Arc<dyn CorrectionStore>, EmbeddingCache) {
        let store: Arc<dyn CorrectionStore> = Arc::new(MemoryCorrectionStore::new());
        let cache = EmbeddingCache::new(store.clone(), Arc::new(DeterministicEmbedder::new(8)));
        (store, cache)
    }

    #[tokio::test]
    async fn test_ensure_embedding_persists_to_store() {
        let (store, cache) = cache_with_store();
        let record = store
            .create_correction(CorrectionRecord::builder("hello", "bonjour").build())
            .await
            .unwrap();
        assert!(!record.has_embedding());

        let embedding = cache.ensure_embedding(&record).await.unwrap().unwrap();
        assert_eq!(embedding.len(), 8);

        let stored = store.get_correction(&record.id).await.unwrap().unwrap();
        assert_eq!(stored.embedding.as_deref(), Some(embedding.as_slice()));
    }

    #[tokio::test]
    async fn test_ensure_embedding_reuses_existing_vector() {
        let (store, cache) = cache_with_store();
        let record = store
            .create_correction(
                CorrectionRecord::builder("hello", "bonjour")
                    .embedding(vec![9.0; 8])
                    .build(),
            )
            .await
            .unwrap();

        let embedding = cache.ensure_embedding(&record).await.unwrap().unwrap();
        assert_eq!(embedding, vec![9.0; 8]);
    }

    #[tokio::test]
    async fn test_blank_original_yields_none() {
        let (_store, cache) = cache_with_store();
        let record = CorrectionRecord::builder("   ", "x").build();

        assert!(cache.ensure_embedding(&record).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reindex_fills_missing_embeddings_only() {
        let (store, cache) = cache_with_store();
        store
            .create_correction(CorrectionRecord::builder("one", "uno").build())
            .await
            .unwrap();
        store
            .create_correction(
                CorrectionRecord::builder("two", "dos")
                    .embedding(vec![1.0; 8])
                    .build(),
            )
            .await
            .unwrap();

        assert_eq!(cache.reindex_all().await.unwrap(), 1);
        assert_eq!(cache.reindex_all().await.unwrap(), 0);

        let remaining = store
            .count_corrections(Some(CorrectionFilter::default().with_embedding(false)))
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
