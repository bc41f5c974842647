//! Background ticker standing in for a UI event loop.
//!
//! Ticks keep arriving while a run is awaited only if the run yields; the
//! tick count is logged after each run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

pub(crate) const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

pub(crate) struct Heartbeat {
    ticks: Arc<AtomicU64>,
    handle: JoinHandle<()>,
}

impl Heartbeat {
    pub(crate) fn start(interval: Duration) -> Self {
        let ticks = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&ticks);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(interval);
            loop {
                interval.tick().await;
                let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
                tracing::trace!(tick = n, "heartbeat");
            }
        });
        Self { ticks, handle }
    }

    /// Stop ticking and return how many ticks ran.
    pub(crate) fn stop(self) -> u64 {
        self.handle.abort();
        self.ticks.load(Ordering::Relaxed)
    }
}
