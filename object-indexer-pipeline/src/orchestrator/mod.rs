//! Batch pipeline orchestrator.
//!
//! Sequences decode, per-event processing, and the final batch commit for a
//! single invocation. The orchestrator owns the abort contract: the first
//! unrecoverable error stops all further staging and suppresses the commit
//! call.

use std::fmt;

use tracing::{debug, error, info, instrument};

use crate::decoder::decode_payload;
use crate::errors::PipelineError;
use crate::fetcher::ContentFetcher;
use crate::processor::DocumentBuilder;
use crate::synchronizer::IndexSynchronizer;
use object_indexer_repository::CommitOutcome;
use object_indexer_shared::{ChangeEvent, EventKind};

/// Pipeline stage at which a run was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Per-event classification, fetch, build, and staging.
    ProcessingEvents,
    /// The final batch commit.
    Committing,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProcessingEvents => write!(f, "processing-events"),
            Self::Committing => write!(f, "committing"),
        }
    }
}

/// Summary of one completed pipeline run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Number of events decoded from the payload.
    pub events_total: usize,
    /// Number of mutations staged for commit.
    pub staged: usize,
    /// Number of events skipped as unrecognized.
    pub skipped: usize,
    /// Outcome of the batch commit.
    pub commit: CommitOutcome,
}

/// Outcome of one pipeline invocation.
///
/// Every run terminates in exactly one of these; the orchestrator never
/// panics and never swallows a failure.
#[derive(Debug)]
pub enum RunOutcome {
    /// All events were processed and the commit call was issued.
    Success(BatchSummary),
    /// Some events were processed, then the run aborted. Nothing staged
    /// after the failing event and no commit call was made after an abort
    /// during processing.
    PartialFailure {
        /// The stage the run aborted in.
        stage: PipelineStage,
        /// The error that aborted the run.
        cause: PipelineError,
    },
    /// The payload could not be decoded; no event was processed.
    FatalFailure(PipelineError),
}

impl RunOutcome {
    /// Whether the run completed with a commit call issued.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Orchestrator that runs the batch pipeline end-to-end.
///
/// Events are processed strictly in payload order with no parallelism, so
/// the single commit sees exactly this invocation's staged mutations.
pub struct BatchOrchestrator {
    fetcher: ContentFetcher,
    builder: DocumentBuilder,
    synchronizer: IndexSynchronizer,
}

impl BatchOrchestrator {
    /// Create an orchestrator from its pipeline components.
    pub fn new(
        fetcher: ContentFetcher,
        builder: DocumentBuilder,
        synchronizer: IndexSynchronizer,
    ) -> Self {
        Self {
            fetcher,
            builder,
            synchronizer,
        }
    }

    /// Run the pipeline once over the given notification payload.
    #[instrument(skip(self, payload))]
    pub async fn run(&mut self, payload: &str) -> RunOutcome {
        let events = match decode_payload(payload) {
            Ok(events) => events,
            Err(cause) => {
                error!(error = %cause, "Failed to decode notification payload");
                return RunOutcome::FatalFailure(cause);
            }
        };

        info!(event_count = events.len(), "Processing notification batch");

        let mut skipped = 0usize;
        for (index, event) in events.iter().enumerate() {
            match self.process_event(event).await {
                Ok(true) => {}
                Ok(false) => skipped += 1,
                Err(cause) => {
                    error!(
                        index,
                        event_name = %event.event_name,
                        error = %cause,
                        "Aborting batch"
                    );
                    return RunOutcome::PartialFailure {
                        stage: PipelineStage::ProcessingEvents,
                        cause,
                    };
                }
            }
        }

        let staged = self.synchronizer.staged_count();
        let commit = match self.synchronizer.commit().await {
            Ok(outcome) => outcome,
            Err(cause) => {
                error!(error = %cause, "Aborting batch at commit");
                return RunOutcome::PartialFailure {
                    stage: PipelineStage::Committing,
                    cause,
                };
            }
        };

        RunOutcome::Success(BatchSummary {
            events_total: events.len(),
            staged,
            skipped,
            commit,
        })
    }

    /// Process one event, returning whether it produced a staged mutation.
    ///
    /// Delete events stage a removal without a fetch; unrecognized events
    /// are skipped; create and update events fetch content and stage a full
    /// document.
    async fn process_event(&mut self, event: &ChangeEvent) -> Result<bool, PipelineError> {
        match event.kind() {
            EventKind::Delete => {
                self.synchronizer.stage_remove(self.builder.removal(event));
                Ok(true)
            }
            EventKind::Unknown => {
                debug!(event_name = %event.event_name, "Skipping unrecognized event");
                Ok(false)
            }
            kind => {
                let content = self
                    .fetcher
                    .fetch(&event.container_name, &event.object_key)
                    .await?;
                let document = self.builder.indexed(event, content);

                if kind == EventKind::Create {
                    self.synchronizer.stage_add(document);
                } else {
                    self.synchronizer.stage_update(document);
                }
                Ok(true)
            }
        }
    }
}
