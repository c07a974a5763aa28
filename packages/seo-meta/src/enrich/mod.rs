//! Enrichment post-processing and the reference OpenAI enricher.

pub mod prompts;

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "openai")]
pub use openai::OpenAIEnricher;

use serde_json::Value;

use crate::error::{EnrichmentError, Result};
use crate::traits::enricher::EnrichmentPayload;
use crate::trim::{trim_to_limit, DESCRIPTION_MAX_CHARS, KEYWORDS_MAX_CHARS, TITLE_MAX_CHARS};
use crate::types::{GenerationResult, GenerationSource};

/// Enriched titles shorter than this are discarded.
pub const MIN_TITLE_CHARS: usize = 45;

/// Enriched descriptions shorter than this are discarded.
pub const MIN_DESCRIPTION_CHARS: usize = 120;

/// Parse a completion into a payload, tolerating markdown code fences.
pub fn parse_payload(content: &str) -> Result<EnrichmentPayload> {
    let json = strip_code_blocks(content);
    if json.is_empty() {
        return Err(EnrichmentError::Parse("empty completion".into()));
    }
    Ok(serde_json::from_str(json)?)
}

/// Trim a payload to the field budgets and apply the quality gate.
pub fn finalize_payload(payload: EnrichmentPayload) -> Result<GenerationResult> {
    let title = trim_to_limit(&payload.title, TITLE_MAX_CHARS);
    let description = trim_to_limit(&payload.description, DESCRIPTION_MAX_CHARS);
    let keywords = join_keywords(&payload.keywords);

    let title_len = title.chars().count();
    if title_len < MIN_TITLE_CHARS {
        return Err(EnrichmentError::QualityGate {
            field: "title",
            reason: format!("{} chars, need at least {}", title_len, MIN_TITLE_CHARS),
        });
    }

    let description_len = description.chars().count();
    if description_len < MIN_DESCRIPTION_CHARS {
        return Err(EnrichmentError::QualityGate {
            field: "description",
            reason: format!(
                "{} chars, need at least {}",
                description_len, MIN_DESCRIPTION_CHARS
            ),
        });
    }

    if keywords.is_empty() {
        return Err(EnrichmentError::QualityGate {
            field: "keywords",
            reason: "empty".into(),
        });
    }

    Ok(GenerationResult {
        title,
        description,
        keywords,
        source: GenerationSource::Enrichment,
    })
}

/// Join a keyword array (or coerce a scalar) into a capped `", "` list.
fn join_keywords(value: &Value) -> String {
    let joined = match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(value_text)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => String::new(),
        scalar => value_text(scalar).trim().to_string(),
    };

    let capped: String = joined.chars().take(KEYWORDS_MAX_CHARS).collect();
    capped.trim_end_matches([',', ' ']).to_string()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn strip_code_blocks(response: &str) -> &str {
    response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
