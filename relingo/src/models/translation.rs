//! Structured translation result returned by the relay

use serde::{Deserialize, Serialize};

/// The structured result of a translation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    /// Detected source language, or `"unknown"` when the model output could
    /// not be parsed
    pub source_language: String,

    /// The translated text (the raw model output on parse failure)
    pub translation: String,

    /// Optional romanization of the translation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub romanization: Option<String>,

    /// Optional translator notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Translation {
    /// Parse raw model output into a structured translation.
    ///
    /// Models are instructed to answer with a JSON object but do not always
    /// comply; a leading/trailing markdown code fence is stripped before
    /// parsing. When the output still cannot be parsed, the request degrades
    /// gracefully: the raw text is surfaced as the translation with
    /// `source_language = "unknown"` rather than failing the request.
    pub fn from_model_output(raw: &str) -> Self {
        let candidate = strip_code_fence(raw.trim());

        match serde_json::from_str::<Translation>(candidate) {
            Ok(parsed) => parsed,
            Err(_) => Self {
                source_language: "unknown".to_string(),
                translation: raw.trim().to_string(),
                romanization: None,
                notes: None,
            },
        }
    }
}

/// Strip a surrounding markdown code fence (``` or ```json) if present.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };

    // Drop the info string on the opening fence line
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => return text,
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
