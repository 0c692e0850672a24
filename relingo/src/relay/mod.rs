//! The relay facade: request validation, the translation pipeline, and the
//! suggestion workflow.

mod invoker;
mod manager;

pub use invoker::TranslationInvoker;
pub use manager::RelayManager;

use crate::models::VocabularyItem;
use crate::{RelayError, Result};

/// A translation request: the message to translate plus optional
/// per-request vocabulary overrides.
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    /// The text to translate
    pub message: String,

    /// Vocabulary overrides injected into this request's prompt only
    pub vocabulary: Vec<VocabularyItem>,
}

impl TranslateRequest {
    /// Create a request with no vocabulary overrides
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            vocabulary: Vec::new(),
        }
    }

    /// Attach vocabulary overrides
    pub fn with_vocabulary(mut self, vocabulary: Vec<VocabularyItem>) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Reject blank messages before any upstream call is made
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(RelayError::Validation(
                "message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_message_is_rejected() {
        assert!(TranslateRequest::new("hello").validate().is_ok());
        assert!(TranslateRequest::new("   ").validate().is_err());
        assert!(TranslateRequest::new("").validate().is_err());
    }
}
