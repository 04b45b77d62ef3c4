//! Repository trait for timetable persistence.
//!
//! The trait abstracts over storage backends so the HTTP layer and service
//! functions never depend on a concrete implementation.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{TimetableId, TimetableInfo};
use crate::db::models::{NewTimetable, StoredTimetable};

/// Abstract interface for timetable record storage.
#[async_trait]
pub trait TimetableRepository: Send + Sync {
    /// Store a record. A non-empty caller-supplied id upserts under that id;
    /// otherwise a fresh id is generated. Returns the id the record lives
    /// under.
    async fn store_timetable(&self, record: NewTimetable) -> RepositoryResult<TimetableId>;

    /// Fetch a stored record verbatim by id.
    async fn fetch_timetable(&self, id: &TimetableId) -> RepositoryResult<StoredTimetable>;

    /// List `{id, teacher_name}` summaries of all stored records, in insertion
    /// order.
    async fn list_timetables(&self) -> RepositoryResult<Vec<TimetableInfo>>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
