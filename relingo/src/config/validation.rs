//! Configuration validation utilities.
//!
//! This module provides validation functions for configuration values.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &RelayConfig) -> Result<(), ConfigError> {
    validate_retrieval_config(&config.retrieval)?;
    validate_generation_config(&config.generation)?;
    validate_provider_config(&config.provider)?;

    Ok(())
}

/// Validate retrieval configuration.
fn validate_retrieval_config(config: &RetrievalConfig) -> Result<(), ConfigError> {
    if config.top_k == 0 {
        return Err(ConfigError::ValidationError(
            "retrieval.top_k must be greater than 0".to_string(),
        ));
    }

    // Cosine similarity is bounded to [-1, 1]
    if !(-1.0..=1.0).contains(&config.min_score) {
        return Err(ConfigError::ValidationError(format!(
            "retrieval.min_score must be within [-1, 1], got {}",
            config.min_score
        )));
    }

    Ok(())
}

/// Validate generation configuration.
fn validate_generation_config(config: &GenerationConfig) -> Result<(), ConfigError> {
    if config.model_ids.is_empty() {
        return Err(ConfigError::ValidationError(
            "generation.model_ids cannot be empty".to_string(),
        ));
    }

    if config.model_ids.iter().any(|id| id.trim().is_empty()) {
        return Err(ConfigError::ValidationError(
            "generation.model_ids cannot contain blank identifiers".to_string(),
        ));
    }

    if config.base_instruction.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "generation.base_instruction cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validate provider configuration.
fn validate_provider_config(config: &ProviderConfig) -> Result<(), ConfigError> {
    if config.api_base.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.api_base cannot be empty".to_string(),
        ));
    }

    if config.embedding_model.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "provider.embedding_model cannot be empty".to_string(),
        ));
    }

    if config.embedding_dimensions == 0 {
        return Err(ConfigError::ValidationError(
            "provider.embedding_dimensions must be greater than 0".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "provider.timeout_secs must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
