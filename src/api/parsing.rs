//! Inbound event normalization.
//!
//! Lambda hands us one of several loosely-typed shapes: a direct invocation
//! carrying `text`, an API Gateway proxy event whose `body` is a JSON string
//! (optionally base64-encoded), or an S3 notification. Shapes are checked in
//! that order and the first match wins.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::core::models::{InboundEvent, NormalizedRequest, ObjectLocation, UNKNOWN_IDENTIFIER};
use crate::errors::SummarizerError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Detects which envelope shape `event` has.
#[must_use]
pub fn classify_event(event: &Value) -> InboundEvent {
    let Some(map) = event.as_object() else {
        return InboundEvent::Unrecognized;
    };

    if map.contains_key("text") {
        return InboundEvent::DirectText(map.clone());
    }

    if let Some(body) = map.get("body") {
        let base64_encoded = map
            .get("isBase64Encoded")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if let Some(payload) = decode_body(body, base64_encoded) {
            // A body that decoded to nothing still defers to Records on the envelope.
            if !payload.is_empty() || !map.contains_key("Records") {
                return InboundEvent::ProxyBody(payload);
            }
        }
    }

    if map.contains_key("Records") {
        return match first_object_location(map) {
            Some(location) => InboundEvent::StorageNotification(location),
            None => {
                warn!("S3 notification without a bucket name and object key");
                InboundEvent::Unrecognized
            }
        };
    }

    InboundEvent::Unrecognized
}

/// Resolves `event` to the text to summarize.
///
/// # Errors
///
/// Returns [`SummarizerError::NoTextFound`] when no non-empty text can be
/// resolved from any supported shape.
pub fn normalize(event: &Value) -> Result<NormalizedRequest, SummarizerError> {
    match classify_event(event) {
        InboundEvent::DirectText(payload) | InboundEvent::ProxyBody(payload) => {
            resolve_payload(&payload)
        }
        InboundEvent::StorageNotification(location) => Ok(from_location(location, None)),
        InboundEvent::Unrecognized => Err(SummarizerError::NoTextFound),
    }
}

/// Decodes a proxy `body`. Returns `None` when the body has a shape we do not
/// read, and an empty map when decoding failed.
fn decode_body(body: &Value, base64_encoded: bool) -> Option<Map<String, Value>> {
    let owned;
    let raw = if base64_encoded {
        let decoded = body
            .as_str()
            .ok_or_else(|| "body is not a string".to_string())
            .and_then(|b| STANDARD.decode(b).map_err(|e| e.to_string()))
            .and_then(|bytes| String::from_utf8(bytes).map_err(|e| e.to_string()));
        match decoded {
            Ok(text) => {
                owned = text;
                owned.as_str()
            }
            Err(e) => {
                warn!(error = %e, "Base64 decode of body failed");
                return Some(Map::new());
            }
        }
    } else {
        match body {
            Value::String(s) => s.as_str(),
            Value::Object(map) => return Some(map.clone()),
            _ => return None,
        }
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        Ok(other) => {
            warn!(body = %other, "Body JSON is not an object");
            Some(Map::new())
        }
        Err(e) => {
            warn!(error = %e, raw_body = %raw, "JSON parse of body failed");
            Some(Map::new())
        }
    }
}

fn resolve_payload(payload: &Map<String, Value>) -> Result<NormalizedRequest, SummarizerError> {
    let patient_id = non_empty_str(payload, "patient_id");

    if let Some(text) = non_empty_str(payload, "text") {
        return Ok(NormalizedRequest {
            text: text.to_string(),
            identifier: patient_id.unwrap_or(UNKNOWN_IDENTIFIER).to_string(),
            object: None,
        });
    }

    if let Some(location) = first_object_location(payload) {
        return Ok(from_location(location, patient_id));
    }

    info!("No text resolvable from payload");
    Err(SummarizerError::NoTextFound)
}

fn from_location(location: ObjectLocation, patient_id: Option<&str>) -> NormalizedRequest {
    let identifier = patient_id
        .map(str::to_string)
        .or_else(|| identifier_from_key(&location.key))
        .unwrap_or_else(|| UNKNOWN_IDENTIFIER.to_string());

    NormalizedRequest {
        text: location.describe(),
        identifier,
        object: Some(location),
    }
}

/// Reports are uploaded as `<patient>_<anything>`.
fn identifier_from_key(key: &str) -> Option<String> {
    let file_name = key.rsplit('/').next().unwrap_or(key);
    file_name
        .split_once('_')
        .map(|(prefix, _)| prefix)
        .filter(|prefix| !prefix.is_empty())
        .map(str::to_string)
}

fn first_object_location(payload: &Map<String, Value>) -> Option<ObjectLocation> {
    let record = payload.get("Records")?.as_array()?.first()?;
    let bucket = v_str(record, &["s3", "bucket", "name"])?;
    let key = v_str(record, &["s3", "object", "key"])?;
    if bucket.is_empty() || key.is_empty() {
        return None;
    }
    Some(ObjectLocation {
        bucket: bucket.to_string(),
        key: key.to_string(),
    })
}

fn non_empty_str<'a>(payload: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
