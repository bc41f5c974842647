use fetchdemo_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    let log_path = match logging::init_logging() {
        Ok(path) => Some(path),
        Err(err) => {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable: {:#}", err);
            None
        }
    };

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args().await {
        eprintln!("fetchdemo error: {:#}", err);
        if let Some(path) = log_path {
            eprintln!("details: {}", path.display());
        }
        std::process::exit(1);
    }
}
