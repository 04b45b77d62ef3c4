//! Slot-assignment core.
//!
//! The allocator turns a [`TimetableRequest`] into a [`TimetableResult`]: a
//! conflict-free placement of every subject's weekly sessions into (period x day)
//! slots across all class sections, or an accounting of how many sessions could
//! not be placed.
//!
//! The whole computation is a pure function of the request. Occupancy grids are
//! constructed fresh on every call and never leak between invocations.
//!
//! # Placement strategy
//!
//! Subjects are processed in bucket order (see [`BUCKET_ORDER`]); within a
//! subject, sections in index order; within a section, one session at a time.
//! Each session scans the slot universe circularly from a rotating cursor,
//! first restricted to the subject's preferred half of the day, then without
//! the half restriction. Lab sessions need two consecutive periods on the same
//! day and claim both. A session that exhausts both passes is counted in
//! `unassigned_sessions`; there is no backtracking and no early termination.
//!
//! The rotating cursor spreads placements across the week instead of clustering
//! them in the earliest slots. It is a heuristic, not a fairness guarantee: the
//! greedy scan can leave gaps even when a perfect packing exists, particularly
//! once lab pairs fragment availability.

pub mod slots;

use crate::models::timetable::{
    generated_section_name, ClassType, DayHalf, Section, Subject, SubjectCategory,
    TimetableRequest, TimetableResult,
};
use slots::{empty_grid, slot_universe, OccupancyGrid, Slot};


/// Scheduling order policy: regular subjects before remedial ones, labs before
/// theory within a category. Subjects keep their relative input order inside
/// each bucket.
pub const BUCKET_ORDER: [(SubjectCategory, ClassType); 4] = [
    (SubjectCategory::Regular, ClassType::Lab),
    (SubjectCategory::Regular, ClassType::Theory),
    (SubjectCategory::Remedial, ClassType::Lab),
    (SubjectCategory::Remedial, ClassType::Theory),
];

fn bucket_rank(subject: &Subject) -> usize {
    BUCKET_ORDER
        .iter()
        .position(|&(category, class_type)| {
            subject.category == category && subject.class_type == class_type
        })
        .unwrap_or(BUCKET_ORDER.len())
}

/// Human-readable label for a period row, 1-based and locale-independent.
pub fn period_label(index: usize) -> String {
    format!("Period {}", index + 1)
}

/// Total sessions the request asks for: sum of sessions_per_week over all
/// subjects, times the section count. Lab sessions count as one unit each even
/// though a placed lab occupies two slots.
pub fn required_session_count(subjects: &[Subject], section_count: usize) -> u32 {
    subjects
        .iter()
        .map(|s| s.sessions_per_week * section_count as u32)
        .sum()
}

/// Number of placement positions in one section's week.
pub fn total_slot_count(day_count: usize, periods_per_day: usize) -> usize {
    day_count * periods_per_day
}

/// Generate a timetable for the given request.
///
/// Inputs are normalized first (names trimmed, counts clamped, empty and
/// zero-session subjects dropped). If no subjects remain, or there are no days,
/// or no periods, the result is empty rather than an error. Day names are used
/// in the order given; callers are expected to pre-sort them to calendar order
/// (see [`crate::models::timetable::sort_days_calendar`]).
pub fn generate(request: &TimetableRequest) -> TimetableResult {
    let subjects: Vec<Subject> = request
        .subjects
        .iter()
        .filter_map(|spec| spec.normalize())
        .collect();
    let days = request.days.clone();
    let periods_per_day = request.periods_per_day.max(0) as usize;
    let section_count = request.section_count.max(1) as usize;

    let total_slots = total_slot_count(days.len(), periods_per_day);

    if subjects.is_empty() || days.is_empty() || periods_per_day == 0 {
        return TimetableResult {
            sections: Vec::new(),
            teacher_grid: empty_grid(periods_per_day, days.len()),
            days,
            subjects,
            teacher_name: request.teacher_name.clone(),
            unassigned_sessions: 0,
            total_slots,
            required_sessions: 0,
        };
    }

    let required_sessions = required_session_count(&subjects, section_count);
    let slots = slot_universe(periods_per_day, days.len());

    let section_names: Vec<String> = (0..section_count)
        .map(|index| {
            request
                .section_names
                .as_ref()
                .and_then(|names| names.get(index))
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| generated_section_name(index))
        })
        .collect();

    let mut section_grids: Vec<Vec<Vec<String>>> = (0..section_count)
        .map(|_| empty_grid(periods_per_day, days.len()))
        .collect();
    let mut section_occupancy: Vec<OccupancyGrid> = (0..section_count)
        .map(|_| OccupancyGrid::new(periods_per_day, days.len()))
        .collect();
    let mut teacher_occupancy = OccupancyGrid::new(periods_per_day, days.len());

    // Stable sort: input order survives inside each bucket.
    let mut ordered = subjects.clone();
    ordered.sort_by_key(bucket_rank);

    let mut cursor = 0usize;
    let mut unassigned_sessions = 0u32;

    for subject in &ordered {
        for section_index in 0..section_count {
            for _ in 0..subject.sessions_per_week {
                let placed = place_session(
                    subject,
                    &slots,
                    &mut teacher_occupancy,
                    &mut section_occupancy[section_index],
                    &mut section_grids[section_index],
                    &mut cursor,
                );
                if !placed {
                    unassigned_sessions += 1;
                }
            }
        }
    }

    let sections: Vec<Section> = section_names
        .into_iter()
        .zip(section_grids)
        .map(|(name, grid)| Section { name, grid })
        .collect();

    let teacher_grid = derive_teacher_grid(&sections, periods_per_day, days.len());

    TimetableResult {
        sections,
        days,
        subjects,
        teacher_name: request.teacher_name.clone(),
        teacher_grid,
        unassigned_sessions,
        total_slots,
        required_sessions,
    }
}

/// Place one session of `subject` into the section's grid. Returns false when
/// no valid slot (or slot pair, for labs) exists; the cursor is only advanced
/// on success.
fn place_session(
    subject: &Subject,
    slots: &[Slot],
    teacher: &mut OccupancyGrid,
    section: &mut OccupancyGrid,
    grid: &mut [Vec<String>],
    cursor: &mut usize,
) -> bool {
    match subject.class_type {
        ClassType::Theory => {
            let found = find_free_slot(slots, teacher, section, *cursor, Some(subject.preferred_half))
                .or_else(|| find_free_slot(slots, teacher, section, *cursor, None));
            let Some(index) = found else {
                return false;
            };
            let slot = &slots[index];
            grid[slot.period_index][slot.day_index] = subject.name.clone();
            teacher.occupy(slot);
            section.occupy(slot);
            *cursor = (index + 1) % slots.len();
            true
        }
        ClassType::Lab => {
            let found = find_free_pair(slots, teacher, section, *cursor, Some(subject.preferred_half))
                .or_else(|| find_free_pair(slots, teacher, section, *cursor, None));
            let Some((index, partner_index)) = found else {
                return false;
            };
            for &i in &[index, partner_index] {
                let slot = &slots[i];
                grid[slot.period_index][slot.day_index] = subject.name.clone();
                teacher.occupy(slot);
                section.occupy(slot);
            }
            // The cursor resumes after the later period of the pair.
            *cursor = (partner_index + 1) % slots.len();
            true
        }
    }
}

/// Circular scan from `cursor` for the first slot free in both grids. With
/// `half` set, only slots in that half of the day qualify.
fn find_free_slot(
    slots: &[Slot],
    teacher: &OccupancyGrid,
    section: &OccupancyGrid,
    cursor: usize,
    half: Option<DayHalf>,
) -> Option<usize> {
    let total = slots.len();
    for step in 0..total {
        let index = (cursor + step) % total;
        let slot = &slots[index];
        if let Some(required) = half {
            if slot.half != required {
                continue;
            }
        }
        if teacher.is_free(slot) && section.is_free(slot) {
            return Some(index);
        }
    }
    None
}

/// Circular scan for a lab pair: a slot plus the slot one period later on the
/// same day, both passing the half filter (when active) and jointly free.
fn find_free_pair(
    slots: &[Slot],
    teacher: &OccupancyGrid,
    section: &OccupancyGrid,
    cursor: usize,
    half: Option<DayHalf>,
) -> Option<(usize, usize)> {
    let total = slots.len();
    let day_count = slots
        .iter()
        .take_while(|slot| slot.period_index == 0)
        .count();
    for step in 0..total {
        let index = (cursor + step) % total;
        let slot = &slots[index];
        // Same day, next period: one full row ahead in period-major order.
        // No such slot exists for the last period of the day.
        let partner_index = index + day_count;
        if partner_index >= total {
            continue;
        }
        let partner = &slots[partner_index];
        if let Some(required) = half {
            if slot.half != required || partner.half != required {
                continue;
            }
        }
        if teacher.is_free(slot)
            && section.is_free(slot)
            && teacher.is_free(partner)
            && section.is_free(partner)
        {
            return Some((index, partner_index));
        }
    }
    None
}

/// Derived week view of the shared teacher: for every slot, the first section
/// with a non-empty cell wins. Teacher exclusivity guarantees the first match
/// is the only match.
fn derive_teacher_grid(
    sections: &[Section],
    period_count: usize,
    day_count: usize,
) -> Vec<Vec<String>> {
    let mut grid = empty_grid(period_count, day_count);
    for (period_index, row) in grid.iter_mut().enumerate() {
        for (day_index, cell) in row.iter_mut().enumerate() {
            for section in sections {
                let occupant = &section.grid[period_index][day_index];
                if !occupant.is_empty() {
                    *cell = format!("{} ({})", occupant, section.name);
                    break;
                }
            }
        }
    }
    grid
}

/// Replace the text of one cell in the addressed section's grid, returning the
/// updated section list.
///
/// This is a deliberate override: no occupancy bookkeeping, no conflict
/// re-validation, and the teacher grid of a previously generated result stays
/// stale until the next full generation. Out-of-range indices return the input
/// unchanged.
pub fn update_cell(
    sections: &[Section],
    section_index: usize,
    period_index: usize,
    day_index: usize,
    value: &str,
) -> Vec<Section> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            if index != section_index {
                return section.clone();
            }
            let mut updated = section.clone();
            if let Some(row) = updated.grid.get_mut(period_index) {
                if let Some(cell) = row.get_mut(day_index) {
                    *cell = value.to_string();
                }
            }
            updated
        })
        .collect()
}
