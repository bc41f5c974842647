//! `fetchdemo sync|async|parallel` – one strategy over the demo sites.

use anyhow::{Context, Result};
use fetchdemo_core::config::FetchDemoConfig;
use fetchdemo_core::sites::DEMO_SITES;
use fetchdemo_core::{HttpFetcher, Strategy, TextReporter, WorkflowRunner};
use std::sync::Arc;

use crate::cli::heartbeat::{Heartbeat, HEARTBEAT_INTERVAL};

pub async fn run_strategy(cfg: &FetchDemoConfig, strategy: Strategy) -> Result<()> {
    let fetcher = Arc::new(HttpFetcher::new(cfg.transport()).context("build HTTP client")?);
    let mut runner = WorkflowRunner::new(fetcher, DEMO_SITES.iter().copied())
        .with_max_parallel(cfg.max_parallel);

    let heartbeat = Heartbeat::start(HEARTBEAT_INTERVAL);
    let res = match strategy {
        // Blocking fetches hold a blocking-pool thread, never an executor thread.
        Strategy::SequentialBlocking => tokio::task::spawn_blocking(move || {
            let mut reporter = TextReporter::new(std::io::stdout());
            runner.run_blocking(&mut reporter)
        })
        .await
        .context("blocking run task join")?,
        Strategy::SequentialSuspending | Strategy::ParallelSuspending => {
            let mut reporter = TextReporter::new(std::io::stdout());
            runner.run(strategy, &mut reporter).await
        }
    };
    let ticks = heartbeat.stop();
    tracing::debug!(%strategy, ticks, "heartbeat ticks during run");

    let outcome = res.with_context(|| format!("{} run failed", strategy))?;
    tracing::info!(
        %strategy,
        items = outcome.results.len(),
        elapsed_ms = outcome.elapsed.as_millis() as u64,
        "run finished"
    );
    Ok(())
}
