//! Summarize Lambda handler.
//!
//! Resolves text from the inbound event, asks the model for a summary and,
//! when a table is configured, records the result. Every failure is turned
//! into a response envelope here; the function itself never errors.

use std::sync::Arc;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::ai::{GenerationConfig, GenerationRequest, RefusalPolicy, extract};
use crate::clients::{
    BedrockGenerator, DynamoSummaryStore, ObjectReader, S3ObjectReader, SummaryStore,
    TextGenerator,
};
use crate::core::config::AppConfig;
use crate::core::models::{NormalizedRequest, PersistedRecord};
use crate::errors::SummarizerError;

/// Summarization pipeline with its service clients.
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
    objects: Arc<dyn ObjectReader>,
    store: Option<Arc<dyn SummaryStore>>,
    generation: GenerationConfig,
    refusals: RefusalPolicy,
}

impl Summarizer {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>, objects: Arc<dyn ObjectReader>) -> Self {
        Self {
            generator,
            objects,
            store: None,
            generation: GenerationConfig::default(),
            refusals: RefusalPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_store(mut self, store: Arc<dyn SummaryStore>) -> Self {
        self.store = Some(store);
        self
    }

    #[must_use]
    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    #[must_use]
    pub fn with_refusals(mut self, refusals: RefusalPolicy) -> Self {
        self.refusals = refusals;
        self
    }

    /// Builds the AWS clients for `config`. Call once per process.
    pub async fn from_config(config: &AppConfig) -> Self {
        let shared = aws_config::from_env()
            .region(aws_config::Region::new(config.region.clone()))
            .load()
            .await;

        let generator = BedrockGenerator::new(
            aws_sdk_bedrockruntime::Client::new(&shared),
            config.model_id.clone(),
        );
        let objects = S3ObjectReader::new(aws_sdk_s3::Client::new(&shared));

        let mut summarizer = Self::new(Arc::new(generator), Arc::new(objects))
            .with_generation(config.generation)
            .with_refusals(config.refusals.clone());

        if let Some(table) = &config.table_name {
            let store =
                DynamoSummaryStore::new(aws_sdk_dynamodb::Client::new(&shared), table.clone());
            summarizer = summarizer.with_store(Arc::new(store));
        }

        summarizer
    }

    /// Runs one invocation and returns the response envelope.
    pub async fn handle(&self, event: &Value) -> Value {
        match self.summarize(event).await {
            Ok(summary) => helpers::ok_summary(&summary),
            Err(e) => {
                match &e {
                    SummarizerError::NoTextFound => info!("Rejecting event without text"),
                    SummarizerError::ModelRefusal { raw } => {
                        warn!(raw = %raw, "Model declined to summarize");
                    }
                    SummarizerError::Upstream(msg) => error!("AWS service error: {}", msg),
                    SummarizerError::Unexpected(msg) => error!("General error: {}", msg),
                }
                helpers::from_error(&e)
            }
        }
    }

    /// # Errors
    ///
    /// Returns the error kind that decides the response status; see
    /// [`SummarizerError::status_code`].
    pub async fn summarize(&self, event: &Value) -> Result<String, SummarizerError> {
        let request = parsing::normalize(event)?;
        let text = self.resolve_text(&request).await;

        let raw = self
            .generator
            .generate(&GenerationRequest::new(text.clone(), self.generation))
            .await?;

        let extracted = extract(&raw, &self.refusals);
        if extracted.is_refusal {
            return Err(SummarizerError::ModelRefusal {
                raw: extracted.parsed,
            });
        }

        self.persist(&request, &text, &extracted.text).await;
        Ok(extracted.text)
    }

    /// Uploaded reports are summarized from their contents; the notification
    /// description is only used when the object cannot be read.
    async fn resolve_text(&self, request: &NormalizedRequest) -> String {
        let Some(location) = &request.object else {
            return request.text.clone();
        };

        match self.objects.read_text(location).await {
            Ok(content) if !content.trim().is_empty() => content,
            Ok(_) => {
                warn!(uri = %location.uri(), "Uploaded report is empty, summarizing description");
                request.text.clone()
            }
            Err(e) => {
                warn!(
                    uri = %location.uri(),
                    error = %e,
                    "Download failed, summarizing description"
                );
                request.text.clone()
            }
        }
    }

    async fn persist(&self, request: &NormalizedRequest, original_text: &str, summary: &str) {
        let Some(store) = &self.store else {
            return;
        };

        let now = Utc::now();
        let record = PersistedRecord {
            patient_id: request.identifier.clone(),
            report_id: now.format("%Y%m%d%H%M%S%6f").to_string(),
            original_text: original_text.to_string(),
            summary: summary.to_string(),
            created_at: now.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            file_name: request.object.as_ref().map(|o| o.decoded_key()),
            s3_path: request.object.as_ref().map(|o| o.uri()),
        };

        if let Err(e) = store.put_summary(&record).await {
            error!("DynamoDB put_item failed: {}", e);
        }
    }
}

/// Lambda handler for the summarize entrypoint.
///
/// # Errors
///
/// Never returns an error; failures are reported in the response envelope.
#[tracing::instrument(level = "info", skip(event, summarizer))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    summarizer: &Summarizer,
) -> Result<Value, Error> {
    info!(
        event = %event.payload,
        request_id = %event.context.request_id,
        "Summarize Lambda received event"
    );
    Ok(summarizer.handle(&event.payload).await)
}

pub use self::function_handler as handler;
