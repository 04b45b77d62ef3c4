//! Domain types for timetable generation.
//!
//! A timetable request describes the teaching load (subjects with weekly session
//! counts), the teaching days, the number of periods per day, and how many class
//! sections share the same teacher. The allocator turns a request into a
//! [`TimetableResult`] holding one grid per section plus a derived teacher grid.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Kind of teaching session a subject holds.
///
/// Lab sessions occupy two consecutive periods on the same day; theory sessions
/// occupy a single slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassType {
    #[default]
    Theory,
    Lab,
}

/// Curriculum category of a subject. Regular subjects are scheduled before
/// remedial ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCategory {
    #[default]
    Regular,
    Remedial,
}

/// Half of the teaching day. The first ceil(periods / 2) periods belong to the
/// first half, the rest to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayHalf {
    #[default]
    First,
    Second,
}

/// Raw subject configuration as submitted by a client.
///
/// Counts are signed so that malformed input can be clamped instead of rejected;
/// normalization trims the name, floors the session count at zero, and drops
/// subjects that end up empty or with no sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSpec {
    /// Display name of the subject
    pub name: String,
    /// Weekly session count (negative values are clamped to 0)
    pub sessions_per_week: i64,
    /// Theory or lab
    #[serde(default)]
    pub class_type: ClassType,
    /// Regular or remedial
    #[serde(default)]
    pub category: SubjectCategory,
    /// Soft placement preference for one half of the day
    #[serde(default)]
    pub preferred_half: DayHalf,
}

/// Normalized subject, as carried in a [`TimetableResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub name: String,
    pub sessions_per_week: u32,
    #[serde(default)]
    pub class_type: ClassType,
    #[serde(default)]
    pub category: SubjectCategory,
    #[serde(default)]
    pub preferred_half: DayHalf,
}

impl SubjectSpec {
    /// Normalize this spec: trim the name and clamp the session count at zero.
    ///
    /// Returns `None` for subjects that should be excluded from allocation
    /// (empty name after trimming, or zero sessions).
    pub fn normalize(&self) -> Option<Subject> {
        let name = self.name.trim();
        let sessions = self.sessions_per_week.max(0) as u32;
        if name.is_empty() || sessions == 0 {
            return None;
        }
        Some(Subject {
            name: name.to_string(),
            sessions_per_week: sessions,
            class_type: self.class_type,
            category: self.category,
            preferred_half: self.preferred_half,
        })
    }
}

/// Request consumed by the allocator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    /// Teaching load
    pub subjects: Vec<SubjectSpec>,
    /// Teaching days, expected in calendar order (see [`sort_days_calendar`])
    pub days: Vec<String>,
    /// Periods per day (negative values are clamped to 0)
    pub periods_per_day: i64,
    /// Number of class sections (floored at 1)
    #[serde(default = "default_section_count")]
    pub section_count: i64,
    /// Optional per-section display names; missing entries are generated
    #[serde(default)]
    pub section_names: Option<Vec<String>>,
    /// Optional name of the shared teacher
    #[serde(default)]
    pub teacher_name: Option<String>,
}

fn default_section_count() -> i64 {
    1
}

/// One class section and its weekly grid.
///
/// The grid is period-major: `grid[period_index][day_index]` holds the subject
/// name occupying that slot, or an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    pub grid: Vec<Vec<String>>,
}

/// Result of one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableResult {
    /// Per-section grids
    pub sections: Vec<Section>,
    /// Teaching days, in the order the grids are indexed by
    pub days: Vec<String>,
    /// Normalized subjects that took part in allocation
    pub subjects: Vec<Subject>,
    /// Name of the shared teacher, if provided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    /// Derived week view of the shared teacher; occupied cells hold
    /// `"{subject} ({section})"`
    pub teacher_grid: Vec<Vec<String>>,
    /// Sessions that could not be placed under the current constraints
    pub unassigned_sessions: u32,
    /// days x periods
    pub total_slots: usize,
    /// Sum of sessions_per_week x section_count. A lab session counts as one
    /// unit here even though a placed lab consumes two physical slots, so this
    /// can understate true slot pressure.
    pub required_sessions: u32,
}

/// Calendar position of a day name, 1-based from Monday.
///
/// Unrecognized names sort after all calendar days.
pub fn calendar_index(day: &str) -> u32 {
    day.trim()
        .parse::<Weekday>()
        .map(|w| w.number_from_monday())
        .unwrap_or(8)
}

/// Sort day names into fixed calendar order (Monday..Sunday), regardless of
/// selection order. The sort is stable, so unrecognized names keep their
/// relative order after the recognized ones.
pub fn sort_days_calendar(days: &[String]) -> Vec<String> {
    let mut sorted: Vec<String> = days.to_vec();
    sorted.sort_by_key(|d| calendar_index(d));
    sorted
}

/// Generated display name for the section at `index`: `Section A` through
/// `Section Z`, then `Section A2`, `Section B2`, and so on.
pub fn generated_section_name(index: usize) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    let cycle = index / 26;
    if cycle == 0 {
        format!("Section {}", letter)
    } else {
        format!("Section {}{}", letter, cycle + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_clamps() {
        let spec = SubjectSpec {
            name: "  Mathematics  ".to_string(),
            sessions_per_week: 3,
            class_type: ClassType::Theory,
            category: SubjectCategory::Regular,
            preferred_half: DayHalf::First,
        };
        let subject = spec.normalize().unwrap();
        assert_eq!(subject.name, "Mathematics");
        assert_eq!(subject.sessions_per_week, 3);
    }

    #[test]
    fn test_normalize_drops_empty_and_zero() {
        let empty = SubjectSpec {
            name: "   ".to_string(),
            sessions_per_week: 2,
            class_type: ClassType::Theory,
            category: SubjectCategory::Regular,
            preferred_half: DayHalf::First,
        };
        assert!(empty.normalize().is_none());

        let negative = SubjectSpec {
            name: "Science".to_string(),
            sessions_per_week: -4,
            class_type: ClassType::Theory,
            category: SubjectCategory::Regular,
            preferred_half: DayHalf::First,
        };
        assert!(negative.normalize().is_none());
    }

    #[test]
    fn test_calendar_sort_is_selection_order_independent() {
        let days = vec![
            "Friday".to_string(),
            "Monday".to_string(),
            "Wednesday".to_string(),
        ];
        let sorted = sort_days_calendar(&days);
        assert_eq!(sorted, vec!["Monday", "Wednesday", "Friday"]);
    }

    #[test]
    fn test_calendar_sort_keeps_unknown_names_last() {
        let days = vec![
            "Holiday".to_string(),
            "Tuesday".to_string(),
            "Examday".to_string(),
        ];
        let sorted = sort_days_calendar(&days);
        assert_eq!(sorted, vec!["Tuesday", "Holiday", "Examday"]);
    }

    #[test]
    fn test_generated_section_names_cycle() {
        assert_eq!(generated_section_name(0), "Section A");
        assert_eq!(generated_section_name(25), "Section Z");
        assert_eq!(generated_section_name(26), "Section A2");
        assert_eq!(generated_section_name(27), "Section B2");
        assert_eq!(generated_section_name(52), "Section A3");
    }

    #[test]
    fn test_subject_spec_defaults_parse() {
        // Minimal client payloads carry only name + sessionsPerWeek.
        let spec: SubjectSpec =
            serde_json::from_str(r#"{"name":"History","sessionsPerWeek":2}"#).unwrap();
        assert_eq!(spec.class_type, ClassType::Theory);
        assert_eq!(spec.category, SubjectCategory::Regular);
        assert_eq!(spec.preferred_half, DayHalf::First);
    }
}
