pub use bedrock_summarizer::api::status::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    bedrock_summarizer::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
