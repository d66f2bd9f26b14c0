use chrono::NaiveDate;
use thiserror::Error;

use crate::store::{DocStore, StoreError};
use shared::DailySummary;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Read the summary for a date. A date that was never saved reads back as
/// an empty-text record rather than an error.
pub async fn get_summary(
    store: &DocStore,
    date: NaiveDate,
) -> Result<DailySummary, SummaryError> {
    Ok(store
        .get_summary(date)
        .await?
        .unwrap_or_else(|| DailySummary::empty(date)))
}

/// Save the summary for a date, overwriting any previous text wholesale.
pub async fn save_summary(
    store: &DocStore,
    date: NaiveDate,
    summary: &str,
) -> Result<DailySummary, SummaryError> {
    Ok(store.save_summary(date, summary.trim()).await?)
}
