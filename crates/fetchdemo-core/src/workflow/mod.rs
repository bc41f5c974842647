//! Workflow runner: fetch a fixed, ordered identifier list with one of three
//! strategies and report the results in input order.
//!
//! - sequential-blocking: one fetch at a time on the calling thread;
//! - sequential-suspending: one fetch at a time, awaiting each;
//! - parallel-suspending: every fetch launched at once, joined, then reported.
//!
//! The runner is the failure boundary: a failed run is reported to the sink
//! as a single failure line and returned as `RunError`.

mod parallel;
mod runner;
mod sequential;
mod state;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::fetch::FetchError;
use crate::model::FetchResult;

pub use parallel::run_parallel_suspending;
pub use runner::WorkflowRunner;
pub use sequential::{run_sequential_blocking, run_sequential_suspending};
pub use state::RunState;

/// How a run walks the identifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    SequentialBlocking,
    SequentialSuspending,
    ParallelSuspending,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::SequentialBlocking,
        Strategy::SequentialSuspending,
        Strategy::ParallelSuspending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::SequentialBlocking => "sequential-blocking",
            Strategy::SequentialSuspending => "sequential-suspending",
            Strategy::ParallelSuspending => "parallel-suspending",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential-blocking" | "sync" => Ok(Strategy::SequentialBlocking),
            "sequential-suspending" | "async" => Ok(Strategy::SequentialSuspending),
            "parallel-suspending" | "parallel" => Ok(Strategy::ParallelSuspending),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

/// Successful run: results in input order plus wall-clock time.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub strategy: Strategy,
    pub results: Vec<FetchResult>,
    pub elapsed: Duration,
}

/// Why a run did not complete.
#[derive(Debug, Error)]
pub enum RunError {
    /// A fetch failed; sequential runs stop there, parallel runs cancel the rest.
    #[error("{0}")]
    Fetch(#[from] FetchError),
    /// Writing to the report sink failed.
    #[error("report output failed: {0}")]
    Report(#[from] std::io::Error),
    /// A spawned fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    /// Runners execute exactly one run.
    #[error("run already {0}")]
    AlreadyStarted(RunState),
}
