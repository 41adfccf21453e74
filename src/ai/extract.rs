//! Model response extraction.
//!
//! Providers and model versions disagree on where the generated text lives, so
//! extraction tries each known shape in turn and never fails: a body it cannot
//! make sense of is stringified and left to refusal classification.

use serde_json::{Value, json};
use tracing::warn;

use crate::core::models::ExtractedSummary;

pub const DEFAULT_REFUSAL_PHRASES: [&str; 4] = [
    "sorry - this model is unable to respond",
    "unable to respond",
    "cannot respond",
    "i'm unable to",
];

/// Case-insensitive substring match against a flat phrase list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefusalPolicy {
    phrases: Vec<String>,
}

impl RefusalPolicy {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: phrases
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Empty output counts as a refusal.
    #[must_use]
    pub fn is_refusal(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        let lowered = text.to_lowercase();
        self.phrases.iter().any(|p| lowered.contains(p.as_str()))
    }
}

impl Default for RefusalPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_REFUSAL_PHRASES)
    }
}

/// Pulls the generated text out of a raw model response body.
#[must_use]
pub fn extract(body: &[u8], policy: &RefusalPolicy) -> ExtractedSummary {
    let raw_text = String::from_utf8_lossy(body).into_owned();
    let parsed = serde_json::from_str::<Value>(&raw_text).unwrap_or_else(|e| {
        warn!(error = %e, "Model response is not JSON");
        json!({ "raw": raw_text })
    });

    let text = resolve_text(&parsed);
    let is_refusal = policy.is_refusal(&text);

    ExtractedSummary {
        text,
        is_refusal,
        parsed,
    }
}

/// Applies the known response shapes in order.
#[must_use]
pub fn resolve_text(parsed: &Value) -> String {
    if let Some(map) = parsed.as_object() {
        if let Some(results) = map.get("results").and_then(Value::as_array) {
            let first = results.first();
            return first
                .and_then(|r| field_text(r, "outputText"))
                .or_else(|| first.and_then(|r| field_text(r, "output")))
                .unwrap_or_default();
        }
        if map.contains_key("generatedText") {
            return field_text(parsed, "generatedText").unwrap_or_default();
        }
        if map.contains_key("outputText") {
            return field_text(parsed, "outputText").unwrap_or_default();
        }
    }

    match parsed {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// Null and empty strings count as absent so `output` can stand in for a blank
// `outputText`.
fn field_text(value: &Value, field: &str) -> Option<String> {
    match value.get(field)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
