use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use tracing::info;

use super::SummaryStore;
use crate::core::models::PersistedRecord;
use crate::errors::SummarizerError;

/// Writes summaries to a table keyed by `PatientID` and `ReportID`.
pub struct DynamoSummaryStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoSummaryStore {
    #[must_use]
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }
}

fn to_item(record: &PersistedRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::from([
        ("PatientID".to_string(), AttributeValue::S(record.patient_id.clone())),
        ("ReportID".to_string(), AttributeValue::S(record.report_id.clone())),
        ("OriginalText".to_string(), AttributeValue::S(record.original_text.clone())),
        ("Summary".to_string(), AttributeValue::S(record.summary.clone())),
        ("CreatedAt".to_string(), AttributeValue::S(record.created_at.clone())),
    ]);
    if let Some(file_name) = &record.file_name {
        item.insert("FileName".to_string(), AttributeValue::S(file_name.clone()));
    }
    if let Some(s3_path) = &record.s3_path {
        item.insert("S3Path".to_string(), AttributeValue::S(s3_path.clone()));
    }
    item
}

#[async_trait]
impl SummaryStore for DynamoSummaryStore {
    async fn put_summary(&self, record: &PersistedRecord) -> Result<(), SummarizerError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(record)))
            .send()
            .await?;

        info!(
            table = %self.table_name,
            patient_id = %record.patient_id,
            report_id = %record.report_id,
            "Saved summary"
        );
        Ok(())
    }
}
