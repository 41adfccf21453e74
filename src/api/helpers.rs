//! Response envelope builders.
//!
//! Every function returns the proxy-integration shape
//! `{statusCode, headers, body}` with `body` a JSON-encoded string and the
//! same CORS headers on every response. Bodies use `": "` and `", "`
//! separators so they match what existing API clients already receive.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Value, json};

use crate::errors::{REFUSAL_MESSAGE, SummarizerError};

pub const CONTENT_TYPE: &str = "application/json";
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOW_METHODS: &str = "GET,POST,OPTIONS";

/// Headers attached to every response.
#[must_use]
pub fn cors_headers() -> Value {
    json!({
        "Content-Type": CONTENT_TYPE,
        "Access-Control-Allow-Origin": ALLOW_ORIGIN,
        "Access-Control-Allow-Headers": ALLOW_HEADERS,
    })
}

/// Compact JSON with a space after `:` and `,`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encodes a response body with spaced separators.
#[must_use]
pub fn encode_body(body: &Value) -> String {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
    if body.serialize(&mut serializer).is_err() {
        return body.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| body.to_string())
}

fn envelope(status_code: u16, headers: Value, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": headers,
        "body": encode_body(body),
    })
}

/// Returns a 200 OK response carrying the summary.
#[must_use]
pub fn ok_summary(summary: &str) -> Value {
    envelope(200, cors_headers(), &json!({ "summary": summary }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    envelope(status_code, cors_headers(), &json!({ "error": message }))
}

/// Returns a 502 that includes what the model actually sent back.
#[must_use]
pub fn refusal_response(raw: &Value) -> Value {
    envelope(
        502,
        cors_headers(),
        &json!({ "error": REFUSAL_MESSAGE, "raw": raw }),
    )
}

#[must_use]
pub fn from_error(error: &SummarizerError) -> Value {
    match error {
        SummarizerError::ModelRefusal { raw } => refusal_response(raw),
        other => err_response(other.status_code(), &other.to_string()),
    }
}

/// Returns the 200 response of the status route.
#[must_use]
pub fn ok_status(routes: &[&str]) -> Value {
    let mut headers = cors_headers();
    headers["Access-Control-Allow-Methods"] = json!(ALLOW_METHODS);
    envelope(200, headers, &json!({ "status": "ok", "routes": routes }))
}
