//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The domain DTOs are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    Section, Subject, SubjectSpec, TimetableId, TimetableInfo, TimetableRequest, TimetableResult,
};
pub use crate::db::models::StoredTimetable;

/// Request body for saving a timetable record.
///
/// The payload is opaque and stored verbatim; the only validation is that the
/// key is present at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveTimetableRequest {
    /// Existing record id to overwrite (optional; blank means "create new")
    #[serde(default)]
    pub id: Option<String>,
    /// Display name of the owning teacher
    #[serde(default)]
    pub teacher_name: Option<String>,
    /// Timetable document to store
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

/// Response for a successful save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveTimetableResponse {
    /// Id the record was stored under
    pub id: String,
}

/// Timetable list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableListResponse {
    /// List of stored timetable summaries
    pub timetables: Vec<TimetableInfo>,
    /// Total count
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}
