use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{NewTask, SummaryRow, TaskRow};
use shared::{DailySummary, Task};

pub mod error;

pub use error::StoreError;

/// Client for the document store backing the tracker. Constructed once at
/// startup and cloned into application state; all reads and writes go
/// through it, and every failure leaves this boundary already classified
/// as a [`StoreError`].
#[derive(Clone)]
pub struct DocStore {
    pool: SqlitePool,
}

impl DocStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Cheap connectivity probe.
    pub async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    /// Create one task record. The store assigns the id.
    pub async fn add_task(&self, record: &NewTask) -> Result<Task, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO tasks (id, text, date, completed, bulk_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&record.text)
        .bind(record.date)
        .bind(record.completed)
        .bind(&record.bulk_id)
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;

        Ok(Task {
            id,
            text: record.text.clone(),
            date: record.date,
            completed: record.completed,
            bulk_id: record.bulk_id.clone(),
            created_at: record.created_at,
        })
    }

    /// List tasks whose date falls inside the inclusive range, ordered by
    /// date then creation time ascending.
    pub async fn list_tasks(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Task>, StoreError> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            "SELECT * FROM tasks WHERE date >= ? AND date <= ? ORDER BY date ASC, created_at ASC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|r| r.to_shared()).collect())
    }

    pub async fn set_task_completed(
        &self,
        task_id: &Uuid,
        completed: bool,
    ) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE tasks SET completed = ? WHERE id = ?")
            .bind(completed)
            .bind(task_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    pub async fn delete_task(&self, task_id: &Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    // ------------------------------------------------------------------
    // Daily summaries
    // ------------------------------------------------------------------

    pub async fn get_summary(
        &self,
        date: NaiveDate,
    ) -> Result<Option<DailySummary>, StoreError> {
        let row: Option<SummaryRow> =
            sqlx::query_as("SELECT * FROM daily_summaries WHERE date = ?")
                .bind(date)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(|r| r.to_shared()))
    }

    /// Create or overwrite the summary for a date. No history is kept.
    pub async fn save_summary(
        &self,
        date: NaiveDate,
        summary: &str,
    ) -> Result<DailySummary, StoreError> {
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO daily_summaries (date, summary, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(date) DO UPDATE SET
                summary = excluded.summary,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(date)
        .bind(summary)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(DailySummary {
            date,
            summary: summary.to_string(),
            updated_at: Some(now),
        })
    }

    // ------------------------------------------------------------------
    // Health probes
    // ------------------------------------------------------------------

    pub async fn add_probe(&self, note: &str) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO health_probes (id, note, created_at) VALUES (?, ?, ?)")
            .bind(id.to_string())
            .bind(note)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(id)
    }

    pub async fn probe_exists(&self, probe_id: &Uuid) -> Result<bool, StoreError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM health_probes WHERE id = ?")
                .bind(probe_id.to_string())
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    pub async fn delete_probe(&self, probe_id: &Uuid) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM health_probes WHERE id = ?")
            .bind(probe_id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
