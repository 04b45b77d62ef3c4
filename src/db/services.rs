//! High-level persistence operations.
//!
//! Service-layer functions that work with any repository implementation. Use
//! these from application code instead of calling the trait methods directly,
//! so cross-cutting concerns (logging, future validation) live in one place.

use crate::api::{TimetableId, TimetableInfo};
use crate::db::models::{NewTimetable, StoredTimetable};
use crate::db::repository::{RepositoryResult, TimetableRepository};

/// Store a timetable record, returning the id it lives under.
pub async fn store_timetable(
    repo: &dyn TimetableRepository,
    record: NewTimetable,
) -> RepositoryResult<TimetableId> {
    let id = repo.store_timetable(record).await?;
    log::info!("stored timetable {}", id);
    Ok(id)
}

/// Fetch a stored record verbatim by id.
pub async fn get_timetable(
    repo: &dyn TimetableRepository,
    id: &TimetableId,
) -> RepositoryResult<StoredTimetable> {
    repo.fetch_timetable(id).await
}

/// List summaries of all stored records.
pub async fn list_timetables(
    repo: &dyn TimetableRepository,
) -> RepositoryResult<Vec<TimetableInfo>> {
    repo.list_timetables().await
}

/// Verify the storage backend is reachable.
pub async fn health_check(repo: &dyn TimetableRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
