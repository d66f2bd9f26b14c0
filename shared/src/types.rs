use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Task Types
// ============================================================================

/// A single task record, belonging to exactly one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub date: NaiveDate,
    pub completed: bool,
    /// Present only for records created through a bulk date-range
    /// submission; shared by every record of that submission.
    pub bulk_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub text: String,
    /// Defaults to today (anchored to the fixed day offset) when omitted.
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateTaskRequest {
    pub text: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: bool,
}

/// Outcome of a bulk creation. Persist calls are independent, so a batch
/// can partially apply; failed dates are reported for the caller to retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateResponse {
    pub bulk_id: String,
    pub created: Vec<Task>,
    pub failed: Vec<BulkCreateFailure>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateFailure {
    pub date: NaiveDate,
    /// Stable classification tag (e.g. "unavailable", "permission_denied").
    pub error: String,
    pub message: String,
}

// ============================================================================
// Bulk Group Types
// ============================================================================

/// A derived (never persisted) group of task records sharing a bulk id.
/// Records without a bulk id form singleton groups keyed by their own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkGroup {
    pub key: String,
    pub bulk_id: Option<String>,
    /// Representative fields, taken from the first record seen for the key.
    /// Treat them as representative, not authoritative, when members diverge.
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    /// Minimum date across member records.
    pub begin: NaiveDate,
    /// Maximum date across member records.
    pub end: NaiveDate,
    pub count: usize,
}

// ============================================================================
// Daily Summary Types
// ============================================================================

/// Free-text summary for one calendar date. Saved wholesale; no history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub summary: String,
    /// None when the date has no stored summary yet.
    pub updated_at: Option<DateTime<Utc>>,
}

impl DailySummary {
    /// The read-back value for a date that has never been saved.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            summary: String::new(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSummaryRequest {
    pub summary: String,
}

// ============================================================================
// Health Check Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStep {
    Connect,
    Write,
    Read,
    Delete,
}

impl ProbeStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeStep::Connect => "connect",
            ProbeStep::Write => "write",
            ProbeStep::Read => "read",
            ProbeStep::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub step: ProbeStep,
    pub status: ProbeStatus,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub healthy: bool,
    pub results: Vec<ProbeResult>,
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSuccess<T> {
    pub data: T,
}

impl<T> ApiSuccess<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_date_serializes_as_iso_day() {
        let task = Task {
            id: Uuid::new_v4(),
            text: "Gym".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            completed: false,
            bulk_id: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["bulk_id"], serde_json::Value::Null);
    }

    #[test]
    fn test_probe_step_as_str() {
        assert_eq!(ProbeStep::Connect.as_str(), "connect");
        assert_eq!(ProbeStep::Write.as_str(), "write");
        assert_eq!(ProbeStep::Read.as_str(), "read");
        assert_eq!(ProbeStep::Delete.as_str(), "delete");
    }

    #[test]
    fn test_probe_step_serde_lowercase() {
        let json = serde_json::to_string(&ProbeStep::Write).unwrap();
        assert_eq!(json, "\"write\"");
        let status = serde_json::to_string(&ProbeStatus::Passed).unwrap();
        assert_eq!(status, "\"passed\"");
    }

    #[test]
    fn test_empty_summary() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let summary = DailySummary::empty(date);
        assert_eq!(summary.date, date);
        assert!(summary.summary.is_empty());
        assert!(summary.updated_at.is_none());
    }

    #[test]
    fn test_api_success_wraps_data() {
        let success = ApiSuccess::new("test data");
        let json = serde_json::to_string(&success).unwrap();
        assert_eq!(json, r#"{"data":"test data"}"#);
    }
}
