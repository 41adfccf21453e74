use serde::{Deserialize, Serialize};

/// Sampling settings sent with every invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_token_count: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_token_count: 512,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Request body for Titan-style text models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub input_text: String,
    pub text_generation_config: GenerationConfig,
}

impl GenerationRequest {
    #[must_use]
    pub fn new(input_text: impl Into<String>, config: GenerationConfig) -> Self {
        Self {
            input_text: input_text.into(),
            text_generation_config: config,
        }
    }
}
