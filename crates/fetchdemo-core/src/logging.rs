//! Logging: `tracing` events to a per-user log file, stderr when that is unusable.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Subscriber;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Debug for the workspace crates, info for curl/reqwest/hyper.
const DEFAULT_FILTER: &str = "info,fetchdemo=debug,fetchdemo_core=debug,fetchdemo_cli=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/fetchdemo/fetchdemo.log`; creates the directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fetchdemo")?;
    xdg_dirs
        .place_state_file("fetchdemo.log")
        .context("create fetchdemo state directory")
}

/// Plain-text subscriber appending to `file`. Parallel fetch tasks log from
/// several worker threads, so the handle is shared rather than cloned per event.
fn file_subscriber(file: File) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .finish()
}

/// Install file logging and return the log path so failures can point at it.
/// Installs nothing on error; the caller falls back to `init_logging_stderr`.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    file_subscriber(file)
        .try_init()
        .context("install log subscriber")?;

    tracing::info!(
        path = %path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "fetchdemo logging initialized"
    );
    Ok(path)
}

/// Stderr-only logging, for when the state directory is unusable.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
