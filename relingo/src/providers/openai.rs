//! OpenAI-compatible embedding and generation provider.
//!
//! Implements both [`TextEmbedder`] and [`TextGenerator`] against the
//! `/embeddings` and `/chat/completions` endpoints of any OpenAI-compatible
//! API. The client is constructed once from [`ProviderConfig`] and shared;
//! nothing is held in module-level state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{ProviderError, ProviderResult, TextEmbedder, TextGenerator};
use crate::config::ProviderConfig;

/// Client for an OpenAI-compatible embeddings + chat completions API
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    embedding_model: String,
    embedding_dimensions: usize,
}

impl OpenAiProvider {
    /// Construct a provider from configuration.
    ///
    /// The API key is read from the environment variable named in
    /// `config.api_key_env`.
    pub fn from_config(config: &ProviderConfig) -> ProviderResult<Self> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            ProviderError::Unavailable(format!(
                "API key environment variable {} is not set",
                config.api_key_env
            ))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            embedding_model: config.embedding_model.clone(),
            embedding_dimensions: config.embedding_dimensions,
        })
    }
}

// ============ Wire types ============

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl TextEmbedder for OpenAiProvider {
    fn dimensions(&self) -> usize {
        self.embedding_dimensions
    }

    async fn embed(&self, text: &str) -> ProviderResult<Option<Vec<f32>>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: [text],
        };

        let response = self
            .client
            .post(format!("{}/embeddings", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "embeddings returned {}: {}",
                status, body
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(parsed.data.into_iter().next().map(|d| d.embedding))
    }
}

#[async_trait]
impl TextGenerator for OpenAiProvider {
    async fn generate(
        &self,
        model_id: &str,
        system_instruction: &str,
        user_text: &str,
    ) -> ProviderResult<Option<String>> {
        let request = ChatRequest {
            model: model_id,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: user_text,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "chat completion with {} returned {}: {}",
                model_id, status, body
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content))
    }
}
