use std::future::Future;

use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use uuid::Uuid;

use crate::models::NewTask;
use crate::services::date_range;
use crate::store::StoreError;
use shared::Task;

/// Per-date result of a bulk creation. Each persist call is an independent
/// write; a failed date never rolls back the rest of the batch.
#[derive(Debug)]
pub struct BulkOutcome {
    pub bulk_id: String,
    pub created: Vec<Task>,
    pub failed: Vec<BulkFailure>,
}

#[derive(Debug)]
pub struct BulkFailure {
    pub date: NaiveDate,
    pub error: StoreError,
}

impl BulkOutcome {
    fn empty(bulk_id: String) -> Self {
        Self {
            bulk_id,
            created: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Create one task per calendar day in the inclusive range, all tagged with
/// a bulk id unique to this invocation.
///
/// All persist calls are issued together and awaited as a set, so wall-clock
/// time stays near one round trip regardless of range length. There is no
/// cancellation, timeout or retry here; the caller gets the per-date
/// outcome and decides what to do with the failed subset.
///
/// Empty trimmed text or `start > end` is a no-op: zero persist calls, an
/// empty outcome, no error.
pub async fn create_range<F, Fut>(
    text: &str,
    start: NaiveDate,
    end: NaiveDate,
    persist: F,
) -> BulkOutcome
where
    F: Fn(NewTask) -> Fut,
    Fut: Future<Output = Result<Task, StoreError>>,
{
    let bulk_id = format!("bulk-{}", Uuid::new_v4());

    let text = text.trim();
    if text.is_empty() {
        return BulkOutcome::empty(bulk_id);
    }

    let days = date_range::expand(start, end);
    let pending: Vec<Fut> = days
        .iter()
        .map(|day| {
            persist(NewTask {
                text: text.to_string(),
                date: *day,
                completed: false,
                bulk_id: Some(bulk_id.clone()),
                created_at: Utc::now(),
            })
        })
        .collect();

    let mut outcome = BulkOutcome::empty(bulk_id);
    for (day, result) in days.iter().zip(join_all(pending).await) {
        match result {
            Ok(task) => outcome.created.push(task),
            Err(error) => outcome.failed.push(BulkFailure { date: *day, error }),
        }
    }

    outcome
}
