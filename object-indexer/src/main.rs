//! Object indexer entry point.
//!
//! Reads one notification payload from stdin, runs the batch pipeline once,
//! and reports the outcome through logs and the exit code.

use dotenv::dotenv;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use object_indexer::{Dependencies, IndexingError};
use object_indexer_pipeline::RunOutcome;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "Indexer run failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), IndexingError> {
    let mut payload = String::new();
    tokio::io::stdin().read_to_string(&mut payload).await?;

    let deps = Dependencies::new()?;
    let mut orchestrator = deps.orchestrator;

    match orchestrator.run(&payload).await {
        RunOutcome::Success(summary) => {
            if summary.commit.success {
                info!(
                    events = summary.events_total,
                    staged = summary.staged,
                    skipped = summary.skipped,
                    "Batch commit to search application succeeded"
                );
            } else {
                warn!(
                    status = %summary.commit.raw_status,
                    "Search application rejected the batch commit"
                );
            }
            Ok(())
        }
        RunOutcome::PartialFailure { stage, cause } => {
            error!(stage = %stage, error = %cause, "Batch aborted");
            Err(cause.into())
        }
        RunOutcome::FatalFailure(cause) => {
            error!(error = %cause, "Batch failed before any event was processed");
            Err(cause.into())
        }
    }
}
