//! Wire protocol: request body and response classification.
//!
//! The backend reports logical failures with a top-level `detail` field and
//! a non-2xx status, so the body alone decides the outcome.

use serde::Serialize;
use serde_json::Value;

use satya_core::{ServiceOutcome, VerificationRecord};

/// Body of `POST /verify_and_log`. Serializes to exactly `{"claim": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyRequest<'a> {
    pub claim: &'a str,
}

impl<'a> VerifyRequest<'a> {
    pub fn new(claim: &'a str) -> Self {
        Self { claim }
    }
}

/// Classify a raw response body.
///
/// - not JSON, or not an object → `TransportError`
/// - non-null top-level `detail` → `LogicalError` (strings verbatim, other
///   values as their JSON text)
/// - `satya_score` and `blockchain_record` both present and well-typed → `Success`
/// - anything else → `TransportError`
pub fn classify_response(body: &[u8]) -> ServiceOutcome {
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        Err(e) => return ServiceOutcome::transport(format!("response is not JSON: {e}")),
    };

    let Some(object) = value.as_object() else {
        return ServiceOutcome::transport("response is not a JSON object");
    };

    if let Some(detail) = object.get("detail").filter(|d| !d.is_null()) {
        let text = match detail {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return ServiceOutcome::logical(text);
    }

    if !(object.contains_key("satya_score") && object.contains_key("blockchain_record")) {
        return ServiceOutcome::transport(
            "response carries neither detail nor a complete verification record",
        );
    }

    match serde_json::from_value::<VerificationRecord>(value) {
        Ok(record) => ServiceOutcome::Success(record),
        Err(e) => ServiceOutcome::transport(format!("malformed verification record: {e}")),
    }
}
