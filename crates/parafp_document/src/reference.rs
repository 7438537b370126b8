use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// One row of generated text to verify against the document.
///
/// Only `original` is read during resolution. The remaining fields are
/// opaque bookkeeping from the rewriting process, echoed back verbatim in
/// diagnostics so a human can locate the row in the source table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceRecord {
    /// External identifier of the row.
    pub id: String,
    /// Section number within the book, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<u32>,
    /// Position within the section, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// The text whose identity is being resolved.
    pub original: String,
    /// Opaque attribute blob; never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<JsonValue>,
}
