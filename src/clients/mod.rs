//! AWS service clients behind the traits the handler depends on.
//!
//! The handler only sees [`TextGenerator`], [`ObjectReader`] and
//! [`SummaryStore`]; the Bedrock, S3 and DynamoDB implementations are built
//! once at cold start and shared across invocations.

pub mod bedrock;
pub mod dynamodb;
pub mod s3;

use async_trait::async_trait;

use crate::ai::GenerationRequest;
use crate::core::models::{ObjectLocation, PersistedRecord};
use crate::errors::SummarizerError;

pub use bedrock::BedrockGenerator;
pub use dynamodb::DynamoSummaryStore;
pub use s3::S3ObjectReader;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Invokes the model and returns the raw response body.
    async fn generate(&self, request: &GenerationRequest) -> Result<Vec<u8>, SummarizerError>;
}

#[async_trait]
pub trait ObjectReader: Send + Sync {
    async fn read_text(&self, location: &ObjectLocation) -> Result<String, SummarizerError>;
}

#[async_trait]
pub trait SummaryStore: Send + Sync {
    async fn put_summary(&self, record: &PersistedRecord) -> Result<(), SummarizerError>;
}
