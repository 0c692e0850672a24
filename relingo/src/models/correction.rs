//! Correction record model representing stored translation overrides

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a correction record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CorrectionStatus {
    /// Submitted but not yet reviewed; never used for ranking
    Pending,

    /// Reviewed and part of the retrieval set
    Approved,
}

impl Default for CorrectionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for CorrectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
        }
    }
}

/// A stored original/suggestion pair representing a translation override
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrectionRecord {
    /// Unique identifier, assigned by the store on creation
    pub id: String,

    /// Source-language text, the retrieval key
    pub original: String,

    /// The corrected/preferred target text
    pub suggestion: String,

    /// Optional free-text usage note
    pub context: Option<String>,

    /// Lifecycle status
    pub status: CorrectionStatus,

    /// Lazily computed embedding of `original`; absent until first retrieval
    /// or an explicit reindex
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,

    /// When the record was submitted
    pub created_at: DateTime<Utc>,

    /// When the record was approved (approved records only)
    pub approved_at: Option<DateTime<Utc>>,
}

impl CorrectionRecord {
    /// Create a new pending record with minimal information
    pub fn new(id: String, original: String, suggestion: String) -> Self {
        Self {
            id,
            original,
            suggestion,
            context: None,
            status: CorrectionStatus::Pending,
            embedding: None,
            created_at: Utc::now(),
            approved_at: None,
        }
    }

    /// Create a builder for more complex record creation
    pub fn builder(
        original: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> CorrectionBuilder {
        CorrectionBuilder::new(original, suggestion)
    }

    /// Check if this record has an embedding
    pub fn has_embedding(&self) -> bool {
        self.embedding.is_some()
    }

    /// Check if both text fields are present and non-blank.
    ///
    /// Malformed records fail this check and are never surfaced by ranking.
    pub fn is_well_formed(&self) -> bool {
        !self.original.trim().is_empty() && !self.suggestion.trim().is_empty()
    }

    /// Produce the approved copy of this record: same content under a fresh
    /// identifier, stamped with an approval time.
    pub fn into_approved(mut self) -> Self {
        self.id = Uuid::new_v4().to_string();
        self.status = CorrectionStatus::Approved;
        self.approved_at = Some(Utc::now());
        self
    }
}

/// Builder for creating CorrectionRecord instances
pub struct CorrectionBuilder {
    record: CorrectionRecord,
}

impl CorrectionBuilder {
    /// Create a new builder with an auto-generated UUID
    pub fn new(original: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            record: CorrectionRecord::new(
                Uuid::new_v4().to_string(),
                original.into(),
                suggestion.into(),
            ),
        }
    }

    /// Set the usage note
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.record.context = Some(context.into());
        self
    }

    /// Set the lifecycle status
    pub fn status(mut self, status: CorrectionStatus) -> Self {
        self.record.status = status;
        self
    }

    /// Set the embedding vector
    pub fn embedding(mut self, embedding: Vec<f32>) -> Self {
        self.record.embedding = Some(embedding);
        self
    }

    /// Build the final CorrectionRecord instance
    pub fn build(self) -> CorrectionRecord {
        self.record
    }
}

/// A caller-supplied vocabulary override, used only to bias the current
/// prompt; never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VocabularyItem {
    /// Source-language term
    pub original: String,

    /// Preferred target term
    pub suggestion: String,

    /// Optional usage note
    pub context: Option<String>,
}

impl VocabularyItem {
    /// Create a vocabulary override without a usage note
    pub fn new(original: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            suggestion: suggestion.into(),
            context: None,
        }
    }

    /// Attach a usage note
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
