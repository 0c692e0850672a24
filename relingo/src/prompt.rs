//! Prompt assembly for retrieval-augmented translation.
//!
//! The final instruction is pure text concatenation: the fixed base
//! instruction, then the ranked correction examples (inferred context), then
//! the caller-declared vocabulary overrides (explicit context). Ranked
//! examples come first so the model's recency bias favors the explicitly
//! declared entries. No deduplication is performed between the two sections.

use crate::models::VocabularyItem;
use crate::retrieval::ScoredCandidate;

/// Base system instruction every prompt starts from.
pub const DEFAULT_BASE_INSTRUCTION: &str = "\
You are a professional translator. Translate the user's message, preserving \
tone, register, and intent. Detect the source language yourself.

Respond with a single JSON object and nothing else, using this shape:
{\"source_language\": \"<ISO 639-1 code>\", \"translation\": \"<translated text>\", \
\"romanization\": \"<optional romanization>\", \"notes\": \"<optional translator notes>\"}

Omit \"romanization\" and \"notes\" when they add nothing.";

const EXAMPLES_HEADER: &str = "Reference corrections, ranked by similarity to the input:";
const VOCABULARY_HEADER: &str = "User-declared vocabulary overrides. Always follow these:";

/// Build the final instruction text from the base instruction, ranked
/// correction examples, and caller-supplied vocabulary overrides.
///
/// With both lists empty the base instruction is returned unchanged, no
/// trailing sections.
pub fn assemble(
    base_instruction: &str,
    examples: &[ScoredCandidate],
    vocabulary: &[VocabularyItem],
) -> String {
    let mut prompt = base_instruction.to_string();

    if !examples.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(EXAMPLES_HEADER);
        for candidate in examples {
            prompt.push_str(&format_entry(
                &candidate.record.original,
                &candidate.record.suggestion,
                candidate.record.context.as_deref(),
            ));
        }
    }

    if !vocabulary.is_empty() {
        prompt.push_str("\n\n");
        prompt.push_str(VOCABULARY_HEADER);
        for item in vocabulary {
            prompt.push_str(&format_entry(
                &item.original,
                &item.suggestion,
                item.context.as_deref(),
            ));
        }
    }

    prompt
}

fn format_entry(original: &str, suggestion: &str, context: Option<&str>) -> String {
    match context {
        Some(context) => format!(
            "\n- When the input resembles \"{}\", the correct output is \"{}\" ({})",
            original, suggestion, context
        ),
        None => format!(
            "\n- When the input resembles \"{}\", the correct output is \"{}\"",
            original, suggestion
        ),
    }
}
