//! Format detection for decoded resume payloads.
//!
//! Classification is purely structural: no deserialization, no side effects,
//! total over arbitrary JSON. `Unknown` is an expected outcome for foreign or
//! malformed payloads, not an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level keys a payload must all carry to classify as V1.
const V1_REQUIRED_KEYS: &[&str] = &["personalInfo", "summary", "education", "skills", "projects"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    V1,
    V2,
    Unknown,
}

/// Classifies a decoded payload as V1, V2, or Unknown.
///
/// - V2: a JSON object carrying `blocks` with `version == 2`.
/// - V1: a JSON object with NO `version` key that carries all of
///   `personalInfo`, `summary`, `education`, `skills`, `projects`.
///   A `version` key disqualifies V1 even when every section key is present.
/// - Anything else: Unknown.
pub fn classify(payload: &Value) -> DocumentFormat {
    let obj = match payload.as_object() {
        Some(obj) => obj,
        None => return DocumentFormat::Unknown,
    };

    if obj.contains_key("blocks") && obj.get("version").and_then(Value::as_u64) == Some(2) {
        return DocumentFormat::V2;
    }

    if !obj.contains_key("version") && V1_REQUIRED_KEYS.iter().all(|k| obj.contains_key(*k)) {
        return DocumentFormat::V1;
    }

    DocumentFormat::Unknown
}
