use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use tracing::info;

use super::ObjectReader;
use crate::core::models::ObjectLocation;
use crate::errors::SummarizerError;

pub struct S3ObjectReader {
    client: S3Client,
}

impl S3ObjectReader {
    #[must_use]
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectReader for S3ObjectReader {
    async fn read_text(&self, location: &ObjectLocation) -> Result<String, SummarizerError> {
        let key = location.decoded_key();
        let response = self
            .client
            .get_object()
            .bucket(&location.bucket)
            .key(&key)
            .send()
            .await?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| SummarizerError::Upstream(format!("s3 read body: {e}")))?
            .into_bytes();

        let text = String::from_utf8(bytes.to_vec())
            .map_err(|e| SummarizerError::Unexpected(format!("{key} is not UTF-8: {e}")))?;

        info!(bucket = %location.bucket, key = %key, bytes = text.len(), "Downloaded report");
        Ok(text)
    }
}
