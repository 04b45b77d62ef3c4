//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::timetable::{
    ClassType, DayHalf, Section, Subject, SubjectCategory, SubjectSpec, TimetableRequest,
    TimetableResult,
};

use serde::{Deserialize, Serialize};

/// Saved timetable record identifier (storage key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimetableId(pub String);

impl TimetableId {
    pub fn new(value: impl Into<String>) -> Self {
        TimetableId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TimetableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TimetableId> for String {
    fn from(id: TimetableId) -> Self {
        id.0
    }
}

/// Lightweight listing entry for a saved timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableInfo {
    pub id: TimetableId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timetable_id_roundtrip() {
        let id = TimetableId::new("tt-1");
        assert_eq!(id.value(), "tt-1");
        assert_eq!(id.to_string(), "tt-1");
        assert_eq!(String::from(id), "tt-1");
    }

    #[test]
    fn test_timetable_info_serialization() {
        let info = TimetableInfo {
            id: TimetableId::new("abc"),
            teacher_name: Some("Ms. Rivera".to_string()),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["teacherName"], "Ms. Rivera");
    }
}
