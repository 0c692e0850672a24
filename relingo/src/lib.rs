//! # Relingo
//!
//! Retrieval-augmented translation relay for chat-style applications. Relingo
//! keeps a curated set of approved translation corrections, ranks them against
//! an embedded query with cosine similarity, injects the best matches (plus
//! caller-declared vocabulary) into the model instruction, and invokes an
//! ordered list of generative models with fallback.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use relingo::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Wires logging, the embedded correction store, and the configured
//!     // OpenAI-compatible provider together.
//!     let relay = relingo::init_with_defaults().await?;
//!
//!     // Record a correction and promote it into the approved set.
//!     let id = relay.submit_suggestion("good morning", "おはようございます", None).await?;
//!     relay.approve_suggestion(&id).await?;
//!
//!     // Translate with retrieval-augmented prompting.
//!     let result = relay
//!         .translate(TranslateRequest::new("good morning everyone"))
//!         .await?;
//!     println!("{} ({})", result.translation, result.source_language);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **Collaborators**: the correction store, the embedding model, and the
//!   generative model sit behind [`storage::CorrectionStore`],
//!   [`providers::TextEmbedder`], and [`providers::TextGenerator`]. Bring your
//!   own implementations or use the bundled embedded store and
//!   OpenAI-compatible provider.
//! - **Core**: lazy embedding of corrections, similarity ranking, prompt
//!   assembly, and multi-model fallback live in [`retrieval`], [`prompt`], and
//!   [`relay`].
//!
//! Providers are constructed once at process start and passed into
//! [`relay::RelayManager`]; nothing is held in module-level state.

pub mod config;
pub mod logging;
pub mod models;
pub mod prompt;
pub mod providers;
pub mod relay;
pub mod retrieval;
pub mod similarity;
pub mod storage;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    // Re-export the relay facade
    pub use crate::relay::{RelayManager, TranslateRequest};

    // Re-export crate initialization functions
    pub use crate::{init, init_with_defaults};

    // Re-export config types
    pub use crate::config::{
        ConfigBuilder, GenerationConfig, LogFormat, LogLevel, ProviderConfig, RelayConfig,
        RetrievalConfig,
    };

    // Re-export model types
    pub use crate::models::{
        CorrectionBuilder, CorrectionRecord, CorrectionStatus, Translation, VocabularyItem,
    };

    // Re-export collaborator traits for custom backends
    pub use crate::providers::{TextEmbedder, TextGenerator};
    pub use crate::storage::{CorrectionStore, StorageError};

    // Re-export essential result type
    pub use crate::{RelayError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Relingo operations
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Missing or malformed input, rejected before any upstream call
    #[error("Validation error: {0}")]
    Validation(String),

    /// An upstream collaborator returned nothing usable
    #[error("Upstream returned no usable result: {0}")]
    UpstreamEmpty(String),

    /// Every configured model identifier failed; the request cannot be served
    #[error("Translation service unavailable: all {attempted} configured models failed")]
    AllModelsExhausted {
        /// Number of model identifiers that were tried
        attempted: usize,
    },

    /// A referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Error during storage operations
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    /// Error from an embedding or generation provider
    #[error("Provider error: {0}")]
    Provider(#[from] providers::ProviderError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] logging::LogError),
}

impl From<config::ConfigError> for RelayError {
    fn from(err: config::ConfigError) -> Self {
        RelayError::Configuration(err.to_string())
    }
}

/// Result type for Relingo operations
pub type Result<T> = std::result::Result<T, RelayError>;

/// Initialize Relingo with default configuration
///
/// Sets up the relay with the embedded in-memory correction store and the
/// OpenAI-compatible provider described by the default configuration. The
/// provider reads its API key from the environment variable named in
/// `provider.api_key_env`.
pub async fn init_with_defaults() -> Result<relay::RelayManager> {
    init(config::RelayConfig::default()).await
}

/// Initialize Relingo with the provided configuration
///
/// Initializes logging, constructs the embedded correction store and the
/// configured provider, and returns a [`relay::RelayManager`] wired to them.
/// Use [`relay::RelayManager::new`] directly to supply custom collaborators.
///
/// # Examples
///
/// ```rust,no_run
/// use relingo::prelude::*;
///
/// async fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_model_ids(["gpt-4o-mini", "gpt-4o"])
///         .with_top_k(3)
///         .build()?;
///
///     let relay = relingo::init(config).await?;
///     let _ = relay.list_approved().await?;
///     Ok(())
/// }
/// ```
pub async fn init(config: config::RelayConfig) -> Result<relay::RelayManager> {
    // Ignore errors if tracing is already initialized
    let _ = logging::init(&config.logging);

    let store = storage::create_store();
    let provider = std::sync::Arc::new(providers::openai::OpenAiProvider::from_config(
        &config.provider,
    )?);

    Ok(relay::RelayManager::new(
        store,
        provider.clone(),
        provider,
        config,
    ))
}
