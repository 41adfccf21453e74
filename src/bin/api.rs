use bedrock_summarizer::api::{Summarizer, handler};
use bedrock_summarizer::core::config::AppConfig;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    bedrock_summarizer::setup_logging();

    let config = AppConfig::load().inspect_err(|e| error!("Config error: {:#}", e))?;
    info!(
        model_id = %config.model_id,
        region = %config.region,
        persistence = config.table_name.is_some(),
        "Starting summarize Lambda"
    );

    // Clients are built once and reused by every invocation.
    let summarizer = Summarizer::from_config(&config).await;
    run(service_fn(|event| handler(event, &summarizer))).await
}
