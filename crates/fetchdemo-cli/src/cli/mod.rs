//! CLI for the fetchdemo page fetch demo. One subcommand per strategy.

mod commands;
mod heartbeat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use fetchdemo_core::config;
use fetchdemo_core::Strategy;

use commands::{run_compare, run_completions, run_sites, run_strategy};

/// Top-level CLI for fetchdemo.
#[derive(Debug, Parser)]
#[command(name = "fetchdemo")]
#[command(
    about = "Fetch a fixed list of pages synchronously, asynchronously or in parallel and time it",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch each page in turn on a blocking thread.
    Sync,

    /// Fetch each page in turn, awaiting each without blocking.
    Async,

    /// Launch every fetch at once and report when all have finished.
    Parallel,

    /// Run all three strategies and compare their total times.
    Compare {
        /// Print the comparison as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the pages every run fetches.
    Sites,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Sync => run_strategy(&cfg, Strategy::SequentialBlocking).await?,
            CliCommand::Async => run_strategy(&cfg, Strategy::SequentialSuspending).await?,
            CliCommand::Parallel => run_strategy(&cfg, Strategy::ParallelSuspending).await?,
            CliCommand::Compare { json } => run_compare(&cfg, json).await?,
            CliCommand::Sites => run_sites(),
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
