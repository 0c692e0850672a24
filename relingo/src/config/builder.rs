//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use std::path::Path;

use super::{Result, models::*, validation};

/// Builder for creating RelayConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: RelayConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: RelayConfig::default(),
        }
    }

    /// Set the maximum number of corrections injected into a prompt.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.config.retrieval.top_k = top_k;
        self
    }

    /// Set the similarity floor for retrieved corrections.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.config.retrieval.min_score = min_score;
        self
    }

    /// Set the ordered generative model fallback chain.
    pub fn with_model_ids<I, S>(mut self, model_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.generation.model_ids = model_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the base system instruction.
    pub fn with_base_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.config.generation.base_instruction = instruction.into();
        self
    }

    /// Set the base URL of the OpenAI-compatible API.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.config.provider.api_base = api_base.into();
        self
    }

    /// Set the environment variable the provider reads its API key from.
    pub fn with_api_key_env(mut self, var: impl Into<String>) -> Self {
        self.config.provider.api_key_env = var.into();
        self
    }

    /// Set the embedding model and its vector dimensionality.
    pub fn with_embedding_model(mut self, model: impl Into<String>, dimensions: usize) -> Self {
        self.config.provider.embedding_model = model.into();
        self.config.provider.embedding_dimensions = dimensions;
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file in addition to configuring stdout off.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self.config.logging.stdout = false;
        self
    }

    /// Quiet configuration for tests: warnings and errors only.
    pub fn testing() -> Self {
        Self::new().with_log_level(LogLevel::Warn)
    }

    /// Validate and build the final configuration.
    pub fn build(self) -> Result<RelayConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
