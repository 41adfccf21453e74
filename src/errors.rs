use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use serde_json::Value;
use thiserror::Error;

/// Message returned to callers when no text could be resolved from an event.
pub const NO_TEXT_MESSAGE: &str = "No text provided in payload";

/// Message returned to callers when the model declined or produced nothing.
pub const REFUSAL_MESSAGE: &str = "Model unable to generate a summary";

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("No text provided in payload")]
    NoTextFound,

    /// Carries the parsed upstream body so callers can see what the model said.
    #[error("Model unable to generate a summary")]
    ModelRefusal { raw: Value },

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Unexpected(String),
}

impl SummarizerError {
    /// HTTP status code this error maps to in the response envelope.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            SummarizerError::NoTextFound => 400,
            SummarizerError::ModelRefusal { .. } => 502,
            SummarizerError::Upstream(_) | SummarizerError::Unexpected(_) => 500,
        }
    }
}

// Generic implementation for AWS SDK errors. Every service crate re-exports the
// same smithy `SdkError`, so this covers Bedrock, S3 and DynamoDB alike.
impl<E, R> From<SdkError<E, R>> for SummarizerError
where
    E: std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(error: SdkError<E, R>) -> Self {
        SummarizerError::Upstream(DisplayErrorContext(&error).to_string())
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(error: serde_json::Error) -> Self {
        SummarizerError::Unexpected(error.to_string())
    }
}
