use std::future::Future;
use std::time::Duration;

use tokio::time::timeout;

use crate::store::{DocStore, StoreError};
use shared::{HealthReport, ProbeResult, ProbeStatus, ProbeStep};

/// Run the connectivity probe sequence against the store: connect, write a
/// throwaway record, read it back, delete it. Each step runs under
/// `step_timeout`; the sequence stops at the first failed step and the
/// report carries one result per step attempted.
pub async fn run_probes(store: &DocStore, step_timeout: Duration) -> HealthReport {
    let mut results = Vec::new();

    if run_step(ProbeStep::Connect, "store reachable", step_timeout, store.ping(), &mut results)
        .await
        .is_none()
    {
        return report(results);
    }

    let probe_id = match run_step(
        ProbeStep::Write,
        "test record written",
        step_timeout,
        store.add_probe("health-check"),
        &mut results,
    )
    .await
    {
        Some(id) => id,
        None => return report(results),
    };

    match run_step(
        ProbeStep::Read,
        "test record read back",
        step_timeout,
        store.probe_exists(&probe_id),
        &mut results,
    )
    .await
    {
        Some(true) => {}
        Some(false) => {
            // probe_exists succeeded but the record is gone
            if let Some(last) = results.last_mut() {
                last.status = ProbeStatus::Failed;
                last.message = "test record not found after write".to_string();
            }
            return report(results);
        }
        None => return report(results),
    }

    run_step(
        ProbeStep::Delete,
        "test record deleted",
        step_timeout,
        store.delete_probe(&probe_id),
        &mut results,
    )
    .await;

    report(results)
}

async fn run_step<T, Fut>(
    step: ProbeStep,
    passed_message: &str,
    step_timeout: Duration,
    operation: Fut,
    results: &mut Vec<ProbeResult>,
) -> Option<T>
where
    Fut: Future<Output = Result<T, StoreError>>,
{
    match timeout(step_timeout, operation).await {
        Ok(Ok(value)) => {
            results.push(ProbeResult {
                step,
                status: ProbeStatus::Passed,
                message: passed_message.to_string(),
            });
            Some(value)
        }
        Ok(Err(e)) => {
            results.push(ProbeResult {
                step,
                status: ProbeStatus::Failed,
                message: e.to_string(),
            });
            None
        }
        Err(_) => {
            results.push(ProbeResult {
                step,
                status: ProbeStatus::Failed,
                message: format!("{} probe timed out", step.as_str()),
            });
            None
        }
    }
}

fn report(results: Vec<ProbeResult>) -> HealthReport {
    let healthy = results.len() == 4
        && results.iter().all(|r| r.status == ProbeStatus::Passed);
    HealthReport { healthy, results }
}
