//! Correction retrieval: lazy embedding and similarity ranking.
//!
//! The retriever embeds the incoming query, lazily fills in missing
//! correction embeddings (writing them back to the store so later requests
//! skip the work), scores every approved correction with cosine similarity,
//! and returns the ranked shortlist used for prompt assembly.

mod embedding_cache;
mod retriever;

pub use embedding_cache::EmbeddingCache;
pub use retriever::CorrectionRetriever;

use crate::models::CorrectionRecord;

/// A correction record paired with its similarity score against the query
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    /// The approved correction
    pub record: CorrectionRecord,

    /// Cosine similarity of the record's embedding to the query embedding
    pub score: f32,
}
