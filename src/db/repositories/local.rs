//! In-memory repository implementation.
//!
//! Records live in a process-local map; nothing survives a restart (durability
//! is an explicit non-goal). Suitable for local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::api::{TimetableId, TimetableInfo};
use crate::db::checksum::calculate_checksum;
use crate::db::models::{NewTimetable, StoredTimetable};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, TimetableRepository};

#[derive(Default)]
struct Store {
    records: HashMap<String, StoredTimetable>,
    /// Keeps listing order stable: ids in first-insertion order.
    order: Vec<String>,
}

/// In-memory `TimetableRepository` backed by a `HashMap`.
#[derive(Default)]
pub struct LocalRepository {
    store: RwLock<Store>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.store.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl TimetableRepository for LocalRepository {
    async fn store_timetable(&self, record: NewTimetable) -> RepositoryResult<TimetableId> {
        // An empty caller id means "generate one", same as no id at all.
        let id = record
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let stored = StoredTimetable {
            id: id.clone(),
            teacher_name: record.teacher_name,
            checksum: calculate_checksum(&record.payload.to_string()),
            payload: record.payload,
            created_at: Utc::now(),
        };

        let mut store = self.store.write();
        if store.records.insert(id.clone(), stored).is_none() {
            store.order.push(id.clone());
        }
        log::debug!("stored timetable record {}", id);
        Ok(TimetableId::new(id))
    }

    async fn fetch_timetable(&self, id: &TimetableId) -> RepositoryResult<StoredTimetable> {
        self.store
            .read()
            .records
            .get(id.value())
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Timetable {} not found", id)).with_context(
                    ErrorContext::new("fetch_timetable")
                        .with_entity("timetable")
                        .with_entity_id(id),
                )
            })
    }

    async fn list_timetables(&self) -> RepositoryResult<Vec<TimetableInfo>> {
        let store = self.store.read();
        Ok(store
            .order
            .iter()
            .filter_map(|id| store.records.get(id))
            .map(|record| TimetableInfo {
                id: TimetableId::new(record.id.clone()),
                teacher_name: record.teacher_name.clone(),
            })
            .collect())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: Option<&str>, teacher: Option<&str>) -> NewTimetable {
        NewTimetable {
            id: id.map(str::to_string),
            teacher_name: teacher.map(str::to_string),
            payload: json!({"sections": []}),
        }
    }

    #[tokio::test]
    async fn test_store_generates_id_when_missing() {
        let repo = LocalRepository::new();
        let id = repo.store_timetable(record(None, None)).await.unwrap();
        assert!(!id.value().is_empty());
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_blank_id_is_treated_as_missing() {
        let repo = LocalRepository::new();
        let id = repo.store_timetable(record(Some("  "), None)).await.unwrap();
        assert_ne!(id.value().trim(), "");
        assert_ne!(id.value(), "  ");
    }

    #[tokio::test]
    async fn test_store_upserts_by_id() {
        let repo = LocalRepository::new();
        let first = NewTimetable {
            id: Some("tt-1".to_string()),
            teacher_name: Some("Ms. Rivera".to_string()),
            payload: json!({"v": 1}),
        };
        let second = NewTimetable {
            id: Some("tt-1".to_string()),
            teacher_name: Some("Ms. Rivera".to_string()),
            payload: json!({"v": 2}),
        };
        repo.store_timetable(first).await.unwrap();
        repo.store_timetable(second).await.unwrap();

        assert_eq!(repo.len(), 1);
        let fetched = repo
            .fetch_timetable(&TimetableId::new("tt-1"))
            .await
            .unwrap();
        assert_eq!(fetched.payload, json!({"v": 2}));
    }

    #[tokio::test]
    async fn test_fetch_missing_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo
            .fetch_timetable(&TimetableId::new("nope"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = LocalRepository::new();
        repo.store_timetable(record(Some("b"), Some("Second")))
            .await
            .unwrap();
        repo.store_timetable(record(Some("a"), Some("First")))
            .await
            .unwrap();

        let infos = repo.list_timetables().await.unwrap();
        let ids: Vec<&str> = infos.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_checksum_reflects_payload() {
        let repo = LocalRepository::new();
        let id = repo.store_timetable(record(None, None)).await.unwrap();
        let fetched = repo.fetch_timetable(&id).await.unwrap();
        assert_eq!(
            fetched.checksum,
            calculate_checksum(&json!({"sections": []}).to_string())
        );
    }
}
