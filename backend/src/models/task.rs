use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for task records
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: String,
    pub text: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub bulk_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TaskRow {
    pub fn to_shared(&self) -> shared::Task {
        shared::Task {
            id: Uuid::parse_str(&self.id).unwrap(),
            text: self.text.clone(),
            date: self.date,
            completed: self.completed,
            bulk_id: self.bulk_id.clone(),
            created_at: self.created_at,
        }
    }
}

/// A task record before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub text: String,
    pub date: NaiveDate,
    pub completed: bool,
    pub bulk_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_row_to_shared() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let row = TaskRow {
            id: id.to_string(),
            text: "Gym".to_string(),
            date,
            completed: false,
            bulk_id: Some("bulk-abc".to_string()),
            created_at: now,
        };

        let task = row.to_shared();
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Gym");
        assert_eq!(task.date, date);
        assert!(!task.completed);
        assert_eq!(task.bulk_id.as_deref(), Some("bulk-abc"));
        assert_eq!(task.created_at, now);
    }
}
