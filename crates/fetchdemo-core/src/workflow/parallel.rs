//! Parallel strategy: launch every fetch at once, join, report in input order.
//!
//! Without a limit all N fetches are in flight together. With `max_parallel`
//! set, every task is still spawned up front but waits on a semaphore permit
//! before issuing its request. The first failure fails the run and aborts the
//! fetches still in flight.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::fetch::Fetcher;
use crate::model::FetchResult;
use crate::report::ReportSink;

use super::RunError;

pub async fn run_parallel_suspending<F, S>(
    fetcher: Arc<F>,
    identifiers: Arc<[String]>,
    max_parallel: Option<usize>,
    sink: &mut S,
) -> Result<Vec<FetchResult>, RunError>
where
    F: Fetcher + ?Sized + 'static,
    S: ReportSink + ?Sized,
{
    let count = identifiers.len();
    let permits = max_parallel.map(|n| Arc::new(Semaphore::new(n.max(1))));

    let mut join_set = JoinSet::new();
    for index in 0..count {
        let fetcher = Arc::clone(&fetcher);
        let identifiers = Arc::clone(&identifiers);
        let permits = permits.clone();
        join_set.spawn(async move {
            // Held until the fetch resolves.
            let _permit = match permits {
                Some(sem) => sem.acquire_owned().await.ok(),
                None => None,
            };
            let res = fetcher.fetch(&identifiers[index]).await;
            (index, res)
        });
    }
    tracing::debug!(launched = count, limit = ?max_parallel, "parallel fetches launched");

    // Completion order is arbitrary; slot results by input index.
    let mut slots: Vec<Option<FetchResult>> = (0..count).map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        let (index, res) = match joined {
            Ok(pair) => pair,
            Err(e) => {
                let in_flight = join_set.len();
                join_set.abort_all();
                tracing::warn!(
                    error = %e,
                    cancelled = in_flight,
                    "fetch task did not complete, cancelling in-flight fetches"
                );
                return Err(RunError::Task(e));
            }
        };
        match res {
            Ok(result) => slots[index] = Some(result),
            Err(e) => {
                let in_flight = join_set.len();
                join_set.abort_all();
                if in_flight > 0 {
                    tracing::warn!(
                        identifier = e.identifier(),
                        cancelled = in_flight,
                        "fetch failed, cancelling in-flight fetches"
                    );
                }
                return Err(RunError::Fetch(e));
            }
        }
    }

    let results: Vec<FetchResult> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), count);
    for result in &results {
        sink.report_result(result)?;
    }
    Ok(results)
}
