//! Ordered multi-model invocation with fallback.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::Translation;
use crate::providers::TextGenerator;
use crate::{RelayError, Result};

/// Invokes the configured model identifiers in order until one produces
/// usable output.
///
/// A provider error and an empty completion are treated identically: both
/// advance the chain. Only when every identifier has been tried does the
/// request fail, with [`RelayError::AllModelsExhausted`].
pub struct TranslationInvoker {
    generator: Arc<dyn TextGenerator>,
    model_ids: Vec<String>,
}

impl TranslationInvoker {
    pub fn new(generator: Arc<dyn TextGenerator>, model_ids: Vec<String>) -> Self {
        Self {
            generator,
            model_ids,
        }
    }

    /// Run the fallback chain and parse the first usable output.
    pub async fn invoke(&self, system_instruction: &str, user_text: &str) -> Result<Translation> {
        for model_id in &self.model_ids {
            match self
                .generator
                .generate(model_id, system_instruction, user_text)
                .await
            {
                Ok(Some(output)) if !output.trim().is_empty() => {
                    debug!(model = %model_id, "model produced output");
                    return Ok(Translation::from_model_output(&output));
                }
                Ok(_) => {
                    warn!(model = %model_id, "model produced no output, trying next");
                }
                Err(e) => {
                    warn!(model = %model_id, error = %e, "model invocation failed, trying next");
                }
            }
        }

        Err(RelayError::AllModelsExhausted {
            attempted: self.model_ids.len(),
        })
    }
}

impl std::fmt::Debug for TranslationInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationInvoker")
            .field("model_ids", &self.model_ids)
            .finish()
    }
}
