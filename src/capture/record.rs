//! Capture record definitions.
//!
//! One record is built per handled request and serialized to a single JSON
//! line on standard output.

use serde::Serialize;

/// The record emitted for every request.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureRecord {
    /// HTTP verb, as received.
    pub method: String,

    /// Request target (path plus query string), unnormalized.
    pub url: String,

    /// Request body, decoded best-effort.
    pub data: BodyData,
}

/// A request body: parsed JSON when the bytes parse, raw text otherwise.
///
/// Serialized untagged, so `Json` emits the structured value directly and
/// `Text` emits a JSON string.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BodyData {
    /// Body parsed as a JSON value (object, array, number, string, bool, null).
    Json(serde_json::Value),

    /// Body kept as text; invalid UTF-8 is replaced.
    Text(String),
}

impl BodyData {
    /// Decode a request body.
    ///
    /// Any parse failure, including an empty body, falls back to text.
    pub fn decode(bytes: &[u8]) -> Self {
        match serde_json::from_slice(bytes) {
            Ok(value) => BodyData::Json(value),
            Err(_) => BodyData::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}
