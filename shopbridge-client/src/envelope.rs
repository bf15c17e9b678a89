use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Unwrap the remote success envelope.
///
/// A body of the exact shape `{"status": "success", "data": <payload>}`
/// becomes `<payload>`; every other body passes through unchanged.
pub fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) => {
            let success = map.get("status").and_then(Value::as_str) == Some("success");
            if success {
                if let Some(data) = map.remove("data") {
                    return data;
                }
            }
            Value::Object(map)
        }
        other => other,
    }
}

/// Structured failure body the remote sends for validation and domain errors.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

/// Parse an error-envelope body, `{"status": "error", "message": ..., "errors": ...}`.
/// Returns None for anything that does not match, so the caller can keep the
/// raw body instead.
pub fn parse_error_envelope(body: &str) -> Option<ErrorEnvelope> {
    let value: Value = serde_json::from_str(body).ok()?;
    if value.get("status").and_then(Value::as_str) != Some("error") {
        return None;
    }
    serde_json::from_value(value).ok()
}
