//! End-to-end tests of the relay pipeline through the public API:
//! suggestion workflow, retrieval-augmented prompting, and model fallback.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use relingo::prelude::*;
use relingo::providers::{ProviderError, ProviderResult};
use relingo::storage::MemoryCorrectionStore;

/// Embedder mapping any text containing a keyword to that keyword's vector.
#[derive(Debug)]
struct KeywordEmbedder {
    vectors: HashMap<&'static str, Vec<f32>>,
}

impl KeywordEmbedder {
    fn new(entries: &[(&'static str, [f32; 2])]) -> Self {
        Self {
            vectors: entries.iter().map(|(k, v)| (*k, v.to_vec())).collect(),
        }
    }
}

#[async_trait]
impl TextEmbedder for KeywordEmbedder {
    fn dimensions(&self) -> usize {
        2
    }

    async fn embed(&self, text: &str) -> ProviderResult<Option<Vec<f32>>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        for (keyword, vector) in &self.vectors {
            if text.contains(keyword) {
                return Ok(Some(vector.clone()));
            }
        }
        Ok(Some(vec![0.0, 1.0]))
    }
}

/// Per-model scripted outcome: a response (possibly absent) or an API error.
type Outcome = std::result::Result<Option<String>, String>;

/// Generator with per-model scripted outcomes that records the system
/// instruction it was last invoked with.
#[derive(Debug)]
struct ScriptedGenerator {
    responses: HashMap<&'static str, Outcome>,
    last_instruction: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    fn new(responses: &[(&'static str, std::result::Result<Option<&str>, &str>)]) -> Self {
        Self {
            responses: responses
                .iter()
                .map(|(model, outcome)| {
                    let outcome = match outcome {
                        Ok(text) => Ok(text.map(str::to_string)),
                        Err(e) => Err(e.to_string()),
                    };
                    (*model, outcome)
                })
                .collect(),
            last_instruction: Mutex::new(None),
        }
    }

    fn last_instruction(&self) -> Option<String> {
        self.last_instruction.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        model_id: &str,
        system_instruction: &str,
        _user_text: &str,
    ) -> ProviderResult<Option<String>> {
        *self.last_instruction.lock().unwrap() = Some(system_instruction.to_string());
        match self.responses.get(model_id) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(e)) => Err(ProviderError::Api(e.clone())),
            None => Ok(None),
        }
    }
}

const OK_RESPONSE: &str = r#"{"source_language": "en", "translation": "おはようございます"}"#;

fn relay_with(
    embedder: KeywordEmbedder,
    generator: Arc<ScriptedGenerator>,
    model_ids: &[&str],
) -> RelayManager {
    let config = ConfigBuilder::testing()
        .with_model_ids(model_ids.iter().copied())
        .with_top_k(3)
        .with_min_score(0.3)
        .build()
        .unwrap();

    RelayManager::new(
        Arc::new(MemoryCorrectionStore::new()),
        Arc::new(embedder),
        generator,
        config,
    )
}

#[tokio::test]
async fn test_submit_approve_translate_round_trip() {
    let embedder = KeywordEmbedder::new(&[("morning", [1.0, 0.0])]);
    let generator = Arc::new(ScriptedGenerator::new(&[("m1", Ok(Some(OK_RESPONSE)))]));
    let relay = relay_with(embedder, generator.clone(), &["m1"]);

    let id = relay
        .submit_suggestion("good morning", "おはようございます", Some("polite greeting"))
        .await
        .unwrap();

    // Pending suggestions never reach the prompt
    relay
        .translate(TranslateRequest::new("good morning everyone"))
        .await
        .unwrap();
    assert!(
        !generator
            .last_instruction()
            .unwrap()
            .contains("おはようございます")
    );

    relay.approve_suggestion(&id).await.unwrap();

    let result = relay
        .translate(TranslateRequest::new("good morning everyone"))
        .await
        .unwrap();
    assert_eq!(result.source_language, "en");
    assert_eq!(result.translation, "おはようございます");

    let instruction = generator.last_instruction().unwrap();
    assert!(instruction.contains("good morning"));
    assert!(instruction.contains("おはようございます"));
    assert!(instruction.contains("polite greeting"));
}

#[tokio::test]
async fn test_fallback_recovers_from_primary_failure() {
    let embedder = KeywordEmbedder::new(&[]);
    let generator = Arc::new(ScriptedGenerator::new(&[
        ("primary", Err("overloaded")),
        ("backup", Ok(Some(OK_RESPONSE))),
    ]));
    let relay = relay_with(embedder, generator, &["primary", "backup"]);

    let result = relay
        .translate(TranslateRequest::new("good morning"))
        .await
        .unwrap();
    assert_eq!(result.translation, "おはようございます");
}

#[tokio::test]
async fn test_all_models_failing_surfaces_exhaustion() {
    let embedder = KeywordEmbedder::new(&[]);
    let generator = Arc::new(ScriptedGenerator::new(&[
        ("primary", Err("overloaded")),
        ("backup", Ok(None)),
    ]));
    let relay = relay_with(embedder, generator, &["primary", "backup"]);

    let err = relay
        .translate(TranslateRequest::new("good morning"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RelayError::AllModelsExhausted { attempted: 2 }
    ));
}

/// Embedder whose backing endpoint is unreachable.
#[derive(Debug)]
struct OfflineEmbedder;

#[async_trait]
impl TextEmbedder for OfflineEmbedder {
    fn dimensions(&self) -> usize {
        2
    }

    async fn embed(&self, _text: &str) -> ProviderResult<Option<Vec<f32>>> {
        Err(ProviderError::Http("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_embedding_outage_degrades_to_no_examples() {
    let generator = Arc::new(ScriptedGenerator::new(&[("m1", Ok(Some(OK_RESPONSE)))]));
    let config = ConfigBuilder::testing()
        .with_model_ids(["m1"])
        .with_base_instruction("translate the message")
        .build()
        .unwrap();
    let relay = RelayManager::new(
        Arc::new(MemoryCorrectionStore::new()),
        Arc::new(OfflineEmbedder),
        generator.clone(),
        config,
    );

    let id = relay
        .submit_suggestion("good morning", "おはようございます", None)
        .await
        .unwrap();
    relay.approve_suggestion(&id).await.unwrap();

    // Embedding is down but generation is healthy; translation proceeds
    // without examples instead of failing
    let result = relay
        .translate(TranslateRequest::new("good morning everyone"))
        .await
        .unwrap();
    assert_eq!(result.translation, "おはようございます");
    assert_eq!(
        generator.last_instruction().unwrap(),
        "translate the message"
    );
}

#[tokio::test]
async fn test_unparseable_output_degrades_to_raw_text() {
    let embedder = KeywordEmbedder::new(&[]);
    let generator = Arc::new(ScriptedGenerator::new(&[(
        "m1",
        Ok(Some("Good morning! (not JSON)")),
    )]));
    let relay = relay_with(embedder, generator, &["m1"]);

    let result = relay
        .translate(TranslateRequest::new("good morning"))
        .await
        .unwrap();
    assert_eq!(result.source_language, "unknown");
    assert_eq!(result.translation, "Good morning! (not JSON)");
}
