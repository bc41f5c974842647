//! Compare mode: run all three strategies back to back and report timings.
//!
//! Each strategy gets a fresh runner and a silent sink, so only the elapsed
//! time and item count are kept. The blocking run goes through
//! `spawn_blocking` so it occupies a blocking-pool thread, not the executor.

use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::fetch::Fetcher;
use crate::report::SilentSink;
use crate::workflow::{RunError, Strategy, WorkflowRunner};

/// Result of one strategy run in compare mode.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub strategy: Strategy,
    /// Wall-clock time of the run, failed runs included.
    pub elapsed_ms: u64,
    /// Items fetched (0 when the run failed).
    pub items: usize,
    /// Failure message, if the run failed.
    pub error: Option<String>,
}

impl ComparisonRow {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }
}

/// Runs the three strategies in `Strategy::ALL` order over `identifiers`.
pub async fn run_all<F>(
    fetcher: Arc<F>,
    identifiers: &[String],
    max_parallel: Option<usize>,
) -> Vec<ComparisonRow>
where
    F: Fetcher + 'static,
{
    let mut rows = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let runner = WorkflowRunner::new(Arc::clone(&fetcher), identifiers.iter().cloned())
            .with_max_parallel(max_parallel);
        let started = Instant::now();
        let res = run_one(runner, strategy).await;
        let elapsed = started.elapsed();
        let row = match res {
            Ok(outcome) => ComparisonRow {
                strategy,
                elapsed_ms: outcome.elapsed.as_millis() as u64,
                items: outcome.results.len(),
                error: None,
            },
            Err(e) => ComparisonRow {
                strategy,
                elapsed_ms: elapsed.as_millis() as u64,
                items: 0,
                error: Some(e.to_string()),
            },
        };
        tracing::debug!(?row, "compare row");
        rows.push(row);
    }
    rows
}

async fn run_one<F>(
    mut runner: WorkflowRunner<F>,
    strategy: Strategy,
) -> Result<crate::workflow::RunOutcome, RunError>
where
    F: Fetcher + 'static,
{
    let mut sink = SilentSink;
    if strategy == Strategy::SequentialBlocking {
        return tokio::task::spawn_blocking(move || runner.run_blocking(&mut sink)).await?;
    }
    runner.run(strategy, &mut sink).await
}

/// Fastest successful strategy, or None if every run failed.
pub fn fastest(rows: &[ComparisonRow]) -> Option<Strategy> {
    rows.iter()
        .filter(|r| r.succeeded())
        .min_by_key(|r| r.elapsed_ms)
        .map(|r| r.strategy)
}
