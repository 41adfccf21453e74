use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::info;

use super::TextGenerator;
use crate::ai::GenerationRequest;
use crate::errors::SummarizerError;

/// Bedrock runtime `InvokeModel` client for a single model.
pub struct BedrockGenerator {
    client: BedrockClient,
    model_id: String,
}

impl BedrockGenerator {
    #[must_use]
    pub fn new(client: BedrockClient, model_id: String) -> Self {
        Self { client, model_id }
    }
}

#[async_trait]
impl TextGenerator for BedrockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>, SummarizerError> {
        let body = serde_json::to_vec(request)?;

        #[cfg(feature = "debug-logs")]
        info!("Bedrock request body: {}", String::from_utf8_lossy(&body));

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model_id = %self.model_id,
            input_chars = request.input_text.chars().count(),
            "Invoking Bedrock model"
        );

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await?;

        Ok(response.body.into_inner())
    }
}
