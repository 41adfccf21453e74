use bedrock_summarizer::api::helpers::{err_response, ok_summary, refusal_response};
use serde_json::{Value, json};

/// Tests for the response envelope builders
/// These verify that every response carries the CORS headers and a JSON
/// encoded body string.

fn body_of(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body is a string");
    serde_json::from_str(body).expect("body is JSON")
}

fn assert_cors(response: &Value) {
    let headers = &response["headers"];
    assert_eq!(headers["Content-Type"], "application/json");
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(
        headers["Access-Control-Allow-Headers"],
        "Content-Type,Authorization"
    );
}

#[test]
fn test_summary_response() {
    let response = ok_summary("Stable condition.");

    assert_eq!(response["statusCode"], 200);
    assert_cors(&response);
    assert_eq!(body_of(&response), json!({"summary": "Stable condition."}));
}

#[test]
fn test_no_text_response() {
    let response = err_response(400, "No text provided in payload");

    assert_eq!(response["statusCode"], 400);
    assert_cors(&response);
    assert_eq!(
        body_of(&response),
        json!({"error": "No text provided in payload"})
    );
}

#[test]
fn test_refusal_response_includes_raw() {
    let raw = json!({"results": [{"outputText": "I'm unable to help."}]});
    let response = refusal_response(&raw);

    assert_eq!(response["statusCode"], 502);
    assert_cors(&response);
    let body = body_of(&response);
    assert_eq!(body["error"], "Model unable to generate a summary");
    assert_eq!(body["raw"], raw);
}

#[test]
fn test_summary_text_is_escaped_in_body() {
    let response = ok_summary("He said \"stable\"\nthen slept.");
    assert_eq!(
        body_of(&response)["summary"],
        "He said \"stable\"\nthen slept."
    );
}
