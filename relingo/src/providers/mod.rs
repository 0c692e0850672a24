//! Provider interfaces for the external embedding and generation models.
//!
//! Both models are collaborators behind async traits so deployments can bring
//! their own backends. The bundled [`openai::OpenAiProvider`] implements both
//! against any OpenAI-compatible API.

pub mod openai;

use async_trait::async_trait;

/// Error type for provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport-level failure (connection, timeout)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// The API answered with a payload we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Provider is not configured or unavailable
    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Interface for embedding models that generate vector representations of
/// text.
///
/// `embed` returns `Ok(None)` for empty/whitespace-only input; vectors must
/// be of consistent dimensionality across calls for ranking to be
/// meaningful.
#[async_trait]
pub trait TextEmbedder: Send + Sync + 'static {
    /// The embedding vector dimensionality
    fn dimensions(&self) -> usize;

    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> ProviderResult<Option<Vec<f32>>>;
}

/// Interface for generative text models.
///
/// `generate` returns `Ok(None)` when the model produced nothing usable; the
/// invoker treats that (and empty text) as a failure and advances its
/// fallback chain. Errors signal model unavailability and advance the chain
/// too.
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Invoke the model identified by `model_id` with a system instruction
    /// and the user's message
    async fn generate(
        &self,
        model_id: &str,
        system_instruction: &str,
        user_text: &str,
    ) -> ProviderResult<Option<String>>;
}
