/// Bedrock summarizer - Lambda functions that summarize patient reports with a
/// hosted text model.
///
/// This crate implements two Lambda functions:
/// 1. A summarize function that accepts text from a direct invocation, an API
///    Gateway proxy request or an S3 upload notification, summarizes it with
///    Amazon Bedrock and optionally records the summary in DynamoDB
/// 2. A status function that reports the available routes
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - Bedrock runtime `InvokeModel` for summaries
/// - S3 for uploaded reports
/// - DynamoDB for summary history
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use bedrock_summarizer::api::Summarizer;
/// use bedrock_summarizer::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     bedrock_summarizer::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let summarizer = Summarizer::from_config(&config).await;
///
///     let response = summarizer
///         .handle(&serde_json::json!({ "text": "Patient shows improvement." }))
///         .await;
///     println!("{response}");
///
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::SummarizerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of each Lambda binary; later calls are
/// no-ops.
///
/// # Example
///
/// ```
/// bedrock_summarizer::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
