use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::fetch::Fetcher;
use crate::model::FetchResult;
use crate::report::ReportSink;

use super::parallel::run_parallel_suspending;
use super::sequential::{run_sequential_blocking, run_sequential_suspending};
use super::{RunError, RunOutcome, RunState, Strategy};

/// Runs one strategy over a fixed identifier list, exactly once.
///
/// Measures wall-clock time around the strategy (per-item reporting included),
/// then reports either the total time or a single failure line to the sink.
pub struct WorkflowRunner<F: ?Sized> {
    fetcher: Arc<F>,
    identifiers: Arc<[String]>,
    max_parallel: Option<usize>,
    state: RunState,
}

impl<F: Fetcher + ?Sized + 'static> WorkflowRunner<F> {
    pub fn new<I, T>(fetcher: Arc<F>, identifiers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let identifiers: Arc<[String]> =
            identifiers.into_iter().map(Into::<String>::into).collect();
        Self {
            fetcher,
            identifiers,
            max_parallel: None,
            state: RunState::NotStarted,
        }
    }

    /// Cap in-flight fetches for the parallel strategy (None = launch all at once).
    pub fn with_max_parallel(mut self, max_parallel: Option<usize>) -> Self {
        self.max_parallel = max_parallel;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Sequential-blocking run on the calling thread.
    pub fn run_blocking<S>(&mut self, sink: &mut S) -> Result<RunOutcome, RunError>
    where
        S: ReportSink + ?Sized,
    {
        let strategy = Strategy::SequentialBlocking;
        self.begin(strategy)?;
        let started = Instant::now();
        let res = run_sequential_blocking(self.fetcher.as_ref(), &self.identifiers, sink);
        let elapsed = started.elapsed();
        self.finish(strategy, res, elapsed, sink)
    }

    /// Run `strategy`. `SequentialBlocking` blocks the current thread, executor
    /// thread included; prefer `run_blocking` on a blocking-capable thread.
    pub async fn run<S>(&mut self, strategy: Strategy, sink: &mut S) -> Result<RunOutcome, RunError>
    where
        S: ReportSink + ?Sized,
    {
        self.begin(strategy)?;
        let started = Instant::now();
        let res = match strategy {
            Strategy::SequentialBlocking => {
                run_sequential_blocking(self.fetcher.as_ref(), &self.identifiers, sink)
            }
            Strategy::SequentialSuspending => {
                run_sequential_suspending(self.fetcher.as_ref(), &self.identifiers, sink).await
            }
            Strategy::ParallelSuspending => {
                run_parallel_suspending(
                    Arc::clone(&self.fetcher),
                    Arc::clone(&self.identifiers),
                    self.max_parallel,
                    sink,
                )
                .await
            }
        };
        let elapsed = started.elapsed();
        self.finish(strategy, res, elapsed, sink)
    }

    fn begin(&mut self, strategy: Strategy) -> Result<(), RunError> {
        self.state.start().map_err(RunError::AlreadyStarted)?;
        tracing::info!(
            %strategy,
            identifiers = self.identifiers.len(),
            "run started"
        );
        Ok(())
    }

    fn finish<S>(
        &mut self,
        strategy: Strategy,
        res: Result<Vec<FetchResult>, RunError>,
        elapsed: Duration,
        sink: &mut S,
    ) -> Result<RunOutcome, RunError>
    where
        S: ReportSink + ?Sized,
    {
        let res = res.and_then(|results| {
            sink.report_elapsed(elapsed)?;
            Ok(results)
        });
        match res {
            Ok(results) => {
                self.state.finish(true);
                tracing::info!(
                    %strategy,
                    items = results.len(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "run completed"
                );
                Ok(RunOutcome {
                    strategy,
                    results,
                    elapsed,
                })
            }
            Err(e) => {
                self.state.finish(false);
                tracing::warn!(%strategy, error = %e, "run failed");
                if let Err(report_err) = sink.report_failure(&e) {
                    tracing::warn!("could not report failure: {}", report_err);
                }
                Err(e)
            }
        }
    }
}
