use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier used when an event does not name a patient.
pub const UNKNOWN_IDENTIFIER: &str = "unknown";

/// Where an object-storage notification points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl ObjectLocation {
    #[must_use]
    pub fn uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }

    /// Object keys in notifications are form-encoded; this is the key S3 expects.
    #[must_use]
    pub fn decoded_key(&self) -> String {
        let spaced = self.key.replace('+', " ");
        urlencoding::decode(&spaced)
            .map(|k| k.into_owned())
            .unwrap_or(spaced)
    }

    /// Description summarized when the object itself cannot be read.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("New report uploaded: {}", self.uri())
    }
}

/// Inbound envelope after shape detection.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    /// `{"text": ...}` invoked directly; the event is the payload.
    DirectText(Map<String, Value>),
    /// API Gateway proxy event. The decoded body, empty when decoding failed.
    ProxyBody(Map<String, Value>),
    /// S3 notification, reduced to its first record.
    StorageNotification(ObjectLocation),
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub text: String,
    pub identifier: String,
    /// Set when the text describes an uploaded object rather than carrying it.
    pub object: Option<ObjectLocation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSummary {
    pub text: String,
    pub is_refusal: bool,
    /// The upstream body as parsed, or `{"raw": ...}` when it was not JSON.
    pub parsed: Value,
}

/// Item written to the summaries table. Attribute names are assigned by the
/// store that writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecord {
    pub patient_id: String,
    pub report_id: String,
    pub original_text: String,
    pub summary: String,
    pub created_at: String,
    pub file_name: Option<String>,
    pub s3_path: Option<String>,
}
