use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for daily summaries, keyed by date
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct SummaryRow {
    pub date: NaiveDate,
    pub summary: String,
    pub updated_at: DateTime<Utc>,
}

impl SummaryRow {
    pub fn to_shared(&self) -> shared::DailySummary {
        shared::DailySummary {
            date: self.date,
            summary: self.summary.clone(),
            updated_at: Some(self.updated_at),
        }
    }
}
