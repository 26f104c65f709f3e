//! Normalization of HTTP outcomes into the uniform result mapping.
//!
//! Every public operation returns a `serde_json::Value`: either the decoded
//! success payload, passed through unchanged, or an error record
//! `{status, title, url, detail}`. The presence of a `status` key is the
//! universal discriminator consumers check before treating a mapping as data.

use reqwest::StatusCode;
use serde_json::{Value, json};

/// Sentinel status recorded when no real HTTP status could be determined
/// (connection refused, timeout, malformed URL, ambiguous request failure).
pub const NO_HTTP_STATUS: u16 = 777;

/// True when the mapping is an error record rather than a success payload.
pub fn is_error(result: &Value) -> bool {
    result.get("status").is_some()
}

/// Builds an error record in the normalized shape.
pub(crate) fn error_value(status: u16, title: &str, url: &str, detail: Value) -> Value {
    json!({
        "status": status,
        "title": title,
        "url": url,
        "detail": detail,
    })
}

/// The upstream `detail` field of an error record, or an empty string when
/// the record carries none.
pub(crate) fn error_detail(result: &Value) -> Option<String> {
    if !is_error(result) {
        return None;
    }
    Some(
        result
            .get("detail")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    )
}

/// Normalizes a response obtained over the blocking client.
pub(crate) fn normalize(response: reqwest::blocking::Response) -> Value {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().unwrap_or_default();
    normalize_parts(status, &url, &text)
}

/// Normalizes a response obtained over the async client.
pub(crate) async fn normalize_async(response: reqwest::Response) -> Value {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await.unwrap_or_default();
    normalize_parts(status, &url, &text)
}

fn normalize_parts(status: StatusCode, url: &str, text: &str) -> Value {
    if status.is_success() {
        match serde_json::from_str::<Value>(text) {
            Ok(body) => body,
            // A 2xx with an undecodable body is a request-layer failure.
            Err(_) => error_value(
                NO_HTTP_STATUS,
                "AMBIGUOUS ERROR",
                url,
                json!(format!("Exception for {url}")),
            ),
        }
    } else {
        http_error(status, url, text)
    }
}

/// Error record for a well-formed non-2xx response. The detail comes from the
/// body's `detail` field when the body is a JSON object, from the de-quoted
/// text when the body is a bare JSON string, and falls back to a fixed label
/// otherwise.
fn http_error(status: StatusCode, url: &str, text: &str) -> Value {
    let title = status.canonical_reason().unwrap_or("UNKNOWN");
    let detail = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(body)) => body.get("detail").cloned().unwrap_or(Value::Null),
        Ok(Value::String(s)) => Value::String(s.trim_end_matches('\n').replace('"', "")),
        _ => Value::String("something wrong".to_string()),
    };
    error_value(status.as_u16(), title, url, detail)
}

/// Error record for a failure where no HTTP response was obtained. Both the
/// blocking and async clients report through `reqwest::Error`, so one
/// classifier serves both paths.
pub(crate) fn transport_error(err: &reqwest::Error, url: &str) -> Value {
    let title = if err.is_timeout() {
        "TIMEOUT ERROR"
    } else if err.is_connect() {
        "CONNECTION ERROR"
    } else if err.is_status() {
        "HTTP ERROR"
    } else {
        "AMBIGUOUS ERROR"
    };
    tracing::warn!(%url, error = %err, "request failed without an HTTP status");
    error_value(
        NO_HTTP_STATUS,
        title,
        url,
        json!(format!("Exception for {url}")),
    )
}
