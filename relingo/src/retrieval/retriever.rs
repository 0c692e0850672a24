//! Similarity ranking over the approved correction set.

use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, warn};

use super::{EmbeddingCache, ScoredCandidate};
use crate::Result;
use crate::config::RetrievalConfig;
use crate::providers::TextEmbedder;
use crate::similarity::cosine_similarity;
use crate::storage::{CorrectionFilter, CorrectionStore};

/// Ranks approved corrections against a query embedding.
///
/// Ranking policy: score every candidate, stable-sort by score descending
/// (ties keep store order), truncate to `top_k`, then drop entries at or
/// below `min_score`. The threshold is applied after truncation, so a
/// low-scoring entry inside the top K occupies a slot even though it is
/// dropped from the final list.
pub struct CorrectionRetriever {
    store: Arc<dyn CorrectionStore>,
    cache: EmbeddingCache,
    top_k: usize,
    min_score: f32,
}

impl CorrectionRetriever {
    pub fn new(
        store: Arc<dyn CorrectionStore>,
        embedder: Arc<dyn TextEmbedder>,
        config: &RetrievalConfig,
    ) -> Self {
        let cache = EmbeddingCache::new(store.clone(), embedder);
        Self {
            store,
            cache,
            top_k: config.top_k,
            min_score: config.min_score,
        }
    }

    /// Access the underlying embedding cache (used for reindexing).
    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }

    /// Retrieve the ranked corrections most similar to `query`.
    ///
    /// An unembeddable query (blank text, or an embedder error such as an
    /// endpoint outage) short-circuits to an empty list; translation proceeds
    /// without examples rather than failing while generation is healthy.
    /// Candidates that cannot be embedded, or whose embedding fails, are
    /// likewise skipped rather than failing the request.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<ScoredCandidate>> {
        let query_embedding = match self.cache.embed_query(query).await {
            Ok(Some(embedding)) => embedding,
            Ok(None) => {
                debug!("query is unembeddable, skipping correction retrieval");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(error = %e, "query embedding failed, proceeding without examples");
                return Ok(Vec::new());
            }
        };

        let candidates = self
            .store
            .list_corrections(Some(CorrectionFilter::approved()), None)
            .await?;

        let mut scored = Vec::with_capacity(candidates.len());
        for record in candidates {
            if !record.is_well_formed() {
                continue;
            }

            let embedding = match self.cache.ensure_embedding(&record).await {
                Ok(Some(embedding)) => embedding,
                Ok(None) => continue,
                Err(e) => {
                    warn!(id = %record.id, error = %e, "skipping correction that failed to embed");
                    continue;
                }
            };

            let score = cosine_similarity(&query_embedding, &embedding);
            scored.push(ScoredCandidate { record, score });
        }

        // Stable sort: equal scores keep store order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(self.top_k);
        scored.retain(|candidate| candidate.score > self.min_score);

        debug!(matches = scored.len(), "correction retrieval complete");
        Ok(scored)
    }
}

impl std::fmt::Debug for CorrectionRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorrectionRetriever")
            .field("top_k", &self.top_k)
            .field("min_score", &self.min_score)
            .finish()
    }
}
