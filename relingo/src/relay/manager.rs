//! The relay manager: the crate's main coordination point.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{TranslateRequest, TranslationInvoker};
use crate::config::RelayConfig;
use crate::models::{CorrectionRecord, CorrectionStatus, Translation};
use crate::prompt;
use crate::providers::{TextEmbedder, TextGenerator};
use crate::retrieval::CorrectionRetriever;
use crate::storage::{CorrectionFilter, CorrectionStore};
use crate::{RelayError, Result};

/// Coordinates the correction store, the retriever, and the model invoker
/// behind a single facade.
///
/// Collaborators are injected at construction; the manager holds no global
/// state and is cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct RelayManager {
    store: Arc<dyn CorrectionStore>,
    retriever: CorrectionRetriever,
    invoker: TranslationInvoker,
    config: RelayConfig,
}

impl RelayManager {
    /// Wire a manager from its collaborators and configuration.
    pub fn new(
        store: Arc<dyn CorrectionStore>,
        embedder: Arc<dyn TextEmbedder>,
        generator: Arc<dyn TextGenerator>,
        config: RelayConfig,
    ) -> Self {
        let retriever = CorrectionRetriever::new(store.clone(), embedder, &config.retrieval);
        let invoker = TranslationInvoker::new(generator, config.generation.model_ids.clone());

        Self {
            store,
            retriever,
            invoker,
            config,
        }
    }

    /// Translate a message with retrieval-augmented prompting.
    ///
    /// Retrieves the approved corrections most similar to the message,
    /// assembles them (plus the request's vocabulary overrides) into the
    /// system instruction, and runs the model fallback chain.
    #[instrument(skip(self, request), fields(message_len = request.message.len()))]
    pub async fn translate(&self, request: TranslateRequest) -> Result<Translation> {
        request.validate()?;

        let examples = self.retriever.retrieve(&request.message).await?;
        info!(examples = examples.len(), "assembled retrieval context");

        let instruction = prompt::assemble(
            &self.config.generation.base_instruction,
            &examples,
            &request.vocabulary,
        );

        self.invoker.invoke(&instruction, &request.message).await
    }

    /// Submit a pending correction suggestion, returning its identifier.
    pub async fn submit_suggestion(
        &self,
        original: &str,
        suggestion: &str,
        context: Option<&str>,
    ) -> Result<String> {
        if original.trim().is_empty() || suggestion.trim().is_empty() {
            return Err(RelayError::Validation(
                "original and suggestion must both be non-empty".to_string(),
            ));
        }

        let mut builder = CorrectionRecord::builder(original, suggestion);
        if let Some(context) = context {
            builder = builder.context(context);
        }

        let record = self.store.create_correction(builder.build()).await?;
        info!(id = %record.id, "suggestion submitted");
        Ok(record.id)
    }

    /// Promote a pending suggestion into the approved retrieval set.
    ///
    /// Returns [`RelayError::NotFound`] unless `id` names a pending record.
    ///
    /// The approved copy is created first and the pending record deleted
    /// second; the two writes are not atomic. If the delete fails the
    /// pending record lingers, which is visible in listings but harmless,
    /// since pending records never participate in ranking.
    pub async fn approve_suggestion(&self, id: &str) -> Result<CorrectionRecord> {
        let pending = self
            .store
            .get_correction(id)
            .await?
            .ok_or_else(|| RelayError::NotFound(format!("no pending correction with id {id}")))?;

        // Approval only acts on pending records; anything else is treated the
        // same as an absent record
        if pending.status != CorrectionStatus::Pending {
            return Err(RelayError::NotFound(format!(
                "no pending correction with id {id} (status: {})",
                pending.status
            )));
        }

        let approved = self
            .store
            .create_correction(pending.into_approved())
            .await?;

        if let Err(e) = self.store.delete_correction(id).await {
            warn!(pending_id = %id, approved_id = %approved.id, error = %e,
                "approved copy created but pending record could not be deleted");
        }

        info!(pending_id = %id, approved_id = %approved.id, "suggestion approved");
        Ok(approved)
    }

    /// List pending suggestions awaiting review, in submission order.
    pub async fn list_pending(&self) -> Result<Vec<CorrectionRecord>> {
        Ok(self
            .store
            .list_corrections(Some(CorrectionFilter::pending()), None)
            .await?)
    }

    /// List the approved corrections that participate in retrieval.
    pub async fn list_approved(&self) -> Result<Vec<CorrectionRecord>> {
        Ok(self
            .store
            .list_corrections(Some(CorrectionFilter::approved()), None)
            .await?)
    }

    /// Eagerly embed every stored correction that lacks a vector.
    ///
    /// Returns the number of records embedded. Normally embeddings fill in
    /// lazily during retrieval; this exists for warming a freshly imported
    /// correction set.
    pub async fn reindex_embeddings(&self) -> Result<usize> {
        self.retriever.cache().reindex_all().await
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// The underlying correction store.
    pub fn storage(&self) -> Arc<dyn CorrectionStore> {
        self.store.clone()
    }
}
