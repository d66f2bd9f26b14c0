use chrono::{NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::NewTask;
use crate::services::{bulk, date_range, groups};
use crate::store::{DocStore, StoreError};
use shared::{BulkGroup, Task};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task text must not be empty")]
    EmptyText,
    #[error("Task not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Add a single task. The date defaults to today under the fixed day
/// anchor when the caller does not pick one.
pub async fn add_task(
    store: &DocStore,
    text: &str,
    date: Option<NaiveDate>,
) -> Result<Task, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyText);
    }

    let record = NewTask {
        text: text.to_string(),
        date: date.unwrap_or_else(date_range::today),
        completed: false,
        bulk_id: None,
        created_at: Utc::now(),
    };

    Ok(store.add_task(&record).await?)
}

/// Create one task per day across the inclusive range, all sharing a fresh
/// bulk id. Partial failure is reported per date, not raised.
pub async fn create_bulk(
    store: &DocStore,
    text: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<bulk::BulkOutcome, TaskError> {
    if text.trim().is_empty() {
        return Err(TaskError::EmptyText);
    }

    Ok(bulk::create_range(text, start, end, |record| async move {
        store.add_task(&record).await
    })
    .await)
}

pub async fn list_range(
    store: &DocStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Task>, TaskError> {
    Ok(store.list_tasks(start, end).await?)
}

/// List the range and fold it into bulk groups for display.
pub async fn list_grouped(
    store: &DocStore,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<BulkGroup>, TaskError> {
    let records = store.list_tasks(start, end).await?;
    Ok(groups::group_by_bulk(&records))
}

pub async fn set_completed(
    store: &DocStore,
    task_id: &Uuid,
    completed: bool,
) -> Result<(), TaskError> {
    match store.set_task_completed(task_id, completed).await {
        Ok(()) => Ok(()),
        Err(StoreError::NotFound) => Err(TaskError::NotFound),
        Err(e) => Err(TaskError::Store(e)),
    }
}

pub async fn delete_task(store: &DocStore, task_id: &Uuid) -> Result<(), TaskError> {
    match store.delete_task(task_id).await {
        Ok(()) => Ok(()),
        Err(StoreError::NotFound) => Err(TaskError::NotFound),
        Err(e) => Err(TaskError::Store(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    async fn setup_test_store() -> DocStore {
        let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY NOT NULL,
                text TEXT NOT NULL,
                date DATE NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT FALSE,
                bulk_id TEXT,
                created_at DATETIME NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        DocStore::new(pool)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_add_task_rejects_empty_text() {
        let store = setup_test_store().await;
        let err = add_task(&store, "   ", None).await.unwrap_err();
        assert!(matches!(err, TaskError::EmptyText));
    }

    #[tokio::test]
    async fn test_add_task_trims_and_defaults_to_today() {
        let store = setup_test_store().await;
        let task = add_task(&store, "  Gym  ", None).await.unwrap();
        assert_eq!(task.text, "Gym");
        assert_eq!(task.date, date_range::today());
        assert!(task.bulk_id.is_none());
    }

    #[tokio::test]
    async fn test_create_bulk_rejects_empty_text() {
        let store = setup_test_store().await;
        let err = create_bulk(&store, "", date(2024, 6, 1), date(2024, 6, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::EmptyText));
    }

    #[tokio::test]
    async fn test_create_bulk_then_list_grouped_spans_range() {
        let store = setup_test_store().await;

        let outcome = create_bulk(&store, "Gym", date(2024, 6, 1), date(2024, 6, 3))
            .await
            .unwrap();
        assert_eq!(outcome.created.len(), 3);
        assert!(outcome.failed.is_empty());

        let groups = list_grouped(&store, date(2024, 6, 1), date(2024, 6, 3))
            .await
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, outcome.bulk_id);
        assert_eq!(groups[0].begin, date(2024, 6, 1));
        assert_eq!(groups[0].end, date(2024, 6, 3));
        assert_eq!(groups[0].count, 3);
    }

    #[tokio::test]
    async fn test_set_completed_unknown_id_is_not_found() {
        let store = setup_test_store().await;
        let err = set_completed(&store, &Uuid::new_v4(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, TaskError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let store = setup_test_store().await;
        let err = delete_task(&store, &Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, TaskError::NotFound));
    }
}
