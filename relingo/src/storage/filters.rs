//! Filter types for storage queries

use serde::{Deserialize, Serialize};

use crate::models::CorrectionStatus;

/// Filter for correction record queries
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorrectionFilter {
    /// Filter by lifecycle status
    pub status: Option<CorrectionStatus>,

    /// Filter by embedding presence
    pub has_embedding: Option<bool>,
}

impl CorrectionFilter {
    /// Filter matching only approved records
    pub fn approved() -> Self {
        Self {
            status: Some(CorrectionStatus::Approved),
            ..Default::default()
        }
    }

    /// Filter matching only pending records
    pub fn pending() -> Self {
        Self {
            status: Some(CorrectionStatus::Pending),
            ..Default::default()
        }
    }

    /// Restrict to records with (or without) an embedding
    pub fn with_embedding(mut self, has_embedding: bool) -> Self {
        self.has_embedding = Some(has_embedding);
        self
    }

    /// Check whether a record matches this filter
    pub fn matches(&self, record: &crate::models::CorrectionRecord) -> bool {
        if let Some(status) = self.status
            && record.status != status
        {
            return false;
        }

        if let Some(has_embedding) = self.has_embedding
            && record.has_embedding() != has_embedding
        {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CorrectionRecord;

    #[test]
    fn test_status_filter() {
        let pending = CorrectionRecord::builder("a", "b").build();
        let approved = CorrectionRecord::builder("a", "b")
            .status(CorrectionStatus::Approved)
            .build();

        let filter = CorrectionFilter::approved();
        assert!(!filter.matches(&pending));
        assert!(filter.matches(&approved));
    }

    #[test]
    fn test_embedding_filter() {
        let bare = CorrectionRecord::builder("a", "b").build();
        let embedded = CorrectionRecord::builder("a", "b")
            .embedding(vec![0.5])
            .build();

        let filter = CorrectionFilter::default().with_embedding(false);
        assert!(filter.matches(&bare));
        assert!(!filter.matches(&embedded));
    }

    #[test]
    fn test_combined_filter() {
        let approved_embedded = CorrectionRecord::builder("a", "b")
            .status(CorrectionStatus::Approved)
            .embedding(vec![0.5])
            .build();
        let approved_bare = CorrectionRecord::builder("a", "b")
            .status(CorrectionStatus::Approved)
            .build();

        let filter = CorrectionFilter::approved().with_embedding(true);
        assert!(filter.matches(&approved_embedded));
        assert!(!filter.matches(&approved_bare));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let record = CorrectionRecord::builder("a", "b").build();
        assert!(CorrectionFilter::default().matches(&record));
    }
}
