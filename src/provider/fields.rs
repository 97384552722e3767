//! Lenient field readers shared by the REST adapters

use serde_json::{Map, Value};

use super::adapter::FetchError;

/// Require the body to be a JSON object
pub(crate) fn as_object(value: &Value) -> Result<&Map<String, Value>, FetchError> {
    value
        .as_object()
        .ok_or_else(|| FetchError::Parse("expected a JSON object".to_string()))
}

/// Reject mirror replies that decode fine but describe a failed lookup,
/// e.g. `{"status":"error","message":"user does not exist"}` or `{"errors":[...]}`.
pub(crate) fn reject_error_payload(object: &Map<String, Value>) -> Result<(), FetchError> {
    let status_error = object
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case("error"));

    if status_error || object.contains_key("errors") {
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| first_error_message(object.get("errors")))
            .unwrap_or("provider reported an error");
        return Err(FetchError::Semantic(message.to_string()));
    }
    Ok(())
}

/// First `message` of a GraphQL-style `errors` array
pub(crate) fn first_error_message(errors: Option<&Value>) -> Option<&str> {
    errors?
        .as_array()?
        .first()?
        .get("message")
        .and_then(Value::as_str)
}

/// Non-negative integer field; absent, null or non-numeric reads as 0.
/// Float payloads are truncated.
pub(crate) fn count(object: &Map<String, Value>, key: &str) -> u64 {
    object.get(key).map(count_value).unwrap_or(0)
}

pub(crate) fn count_value(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        .unwrap_or(0)
}

/// Category total; absent or zero falls back to `default`
pub(crate) fn total_or(object: &Map<String, Value>, key: &str, default: u64) -> u64 {
    match count(object, key) {
        0 => default,
        n => n,
    }
}

/// Float field; absent or non-numeric reads as 0
pub(crate) fn rate(object: &Map<String, Value>, key: &str) -> f64 {
    object.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Percent-encode an identifier for use as one URL path segment
pub(crate) fn path_segment(identifier: &str) -> String {
    let mut encoded = String::with_capacity(identifier.len());
    for byte in identifier.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
