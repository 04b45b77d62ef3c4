//! Record types for the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timetable record submitted for storage.
///
/// The payload is opaque to the persistence layer and stored verbatim; no
/// schema validation happens beyond the HTTP boundary's "payload present"
/// check. A non-empty caller-supplied id upserts the record under that id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTimetable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    pub payload: serde_json::Value,
}

/// A stored timetable record, returned verbatim on retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTimetable {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    pub payload: serde_json::Value,
    /// SHA-256 of the payload JSON, for dedup-grade identity
    pub checksum: String,
    pub created_at: DateTime<Utc>,
}
