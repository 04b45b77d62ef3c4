//! Generation orchestration above the allocator core.

use crate::allocator;
use crate::models::timetable::{sort_days_calendar, TimetableRequest, TimetableResult};

/// Run the allocator for a client request.
///
/// The core assumes its day list is already in calendar order; this wrapper
/// re-sorts whatever selection order the client sent (Monday..Sunday, with
/// unrecognized names after), so reordering the input day list never changes
/// the placement outcome.
pub fn generate_timetable(request: &TimetableRequest) -> TimetableResult {
    let mut normalized = request.clone();
    normalized.days = sort_days_calendar(&normalized.days);

    log::debug!(
        "generating timetable: {} subjects, {} days, {} periods/day, {} sections",
        normalized.subjects.len(),
        normalized.days.len(),
        normalized.periods_per_day,
        normalized.section_count
    );

    let result = allocator::generate(&normalized);
    if result.unassigned_sessions > 0 {
        log::warn!(
            "{} of {} sessions could not be placed",
            result.unassigned_sessions,
            result.required_sessions
        );
    }
    result
}
