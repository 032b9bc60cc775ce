//! Index synchronizer for the object indexer pipeline.
//!
//! Owns the pending batch of staged mutations and flushes it to the search
//! application in a single commit call. Staging has no network effect;
//! mutations are recorded in call order and never deduplicated.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::PipelineError;
use object_indexer_repository::{CommitOutcome, DocumentSyncClient, StagedMutation};
use object_indexer_shared::StructuredDocument;

/// Synchronizer that accumulates staged mutations and commits them as one
/// batch.
///
/// The orchestrator owns the synchronizer for the lifetime of one
/// invocation; the synchronizer owns the pending batch until commit drains
/// it.
pub struct IndexSynchronizer {
    client: Arc<dyn DocumentSyncClient>,
    app_name: String,
    table_name: String,
    pending: Vec<StagedMutation>,
}

impl IndexSynchronizer {
    /// Create a synchronizer committing to the given application table.
    pub fn new(
        client: Arc<dyn DocumentSyncClient>,
        app_name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            client,
            app_name: app_name.into(),
            table_name: table_name.into(),
            pending: Vec::new(),
        }
    }

    /// Stage a document addition.
    pub fn stage_add(&mut self, document: StructuredDocument) {
        self.pending.push(StagedMutation::add(document));
    }

    /// Stage a document update.
    pub fn stage_update(&mut self, document: StructuredDocument) {
        self.pending.push(StagedMutation::update(document));
    }

    /// Stage a document removal.
    pub fn stage_remove(&mut self, document: StructuredDocument) {
        self.pending.push(StagedMutation::delete(document));
    }

    /// Number of mutations currently staged.
    pub fn staged_count(&self) -> usize {
        self.pending.len()
    }

    /// Flush the entire pending batch as one push and return the commit
    /// outcome.
    ///
    /// An empty batch is still pushed. A transport or protocol failure is a
    /// [`PipelineError::Commit`]; a well-formed response with a non-`"true"`
    /// status yields an unsuccessful outcome but the batch is complete and
    /// is not retried.
    pub async fn commit(&mut self) -> Result<CommitOutcome, PipelineError> {
        let batch: Vec<StagedMutation> = self.pending.drain(..).collect();

        info!(staged = batch.len(), "Committing pending batch");

        let outcome = self
            .client
            .push_batch(&batch, &self.app_name, &self.table_name)
            .await?;

        if outcome.success {
            info!("Batch commit to search application succeeded");
        } else {
            warn!(
                status = %outcome.raw_status,
                "Search application rejected the batch commit"
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use object_indexer_repository::{IndexSyncError, MutationKind};
    use object_indexer_shared::DocumentId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock sync client recording every pushed batch.
    struct MockSyncClient {
        push_count: AtomicUsize,
        batches: Mutex<Vec<Vec<StagedMutation>>>,
        raw_status: String,
        fail: bool,
    }

    impl MockSyncClient {
        fn new(raw_status: &str) -> Self {
            Self {
                push_count: AtomicUsize::new(0),
                batches: Mutex::new(Vec::new()),
                raw_status: raw_status.to_string(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new("true")
            }
        }

        fn pushed_batches(&self) -> Vec<Vec<StagedMutation>> {
            self.batches.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentSyncClient for MockSyncClient {
        async fn push_batch(
            &self,
            mutations: &[StagedMutation],
            _app_name: &str,
            _table_name: &str,
        ) -> Result<CommitOutcome, IndexSyncError> {
            if self.fail {
                return Err(IndexSyncError::push("push rejected"));
            }
            self.push_count.fetch_add(1, Ordering::SeqCst);
            self.batches.lock().unwrap().push(mutations.to_vec());
            Ok(CommitOutcome::from_raw_status(self.raw_status.clone()))
        }
    }

    fn synchronizer(client: Arc<MockSyncClient>) -> IndexSynchronizer {
        IndexSynchronizer::new(client, "object-search", "documents")
    }

    fn document(key: &str, content: &str) -> StructuredDocument {
        StructuredDocument::indexed(
            DocumentId::derive("docs", key),
            key,
            content,
            format!("http://docs.oss.example.com/{}", key),
        )
    }

    #[tokio::test]
    async fn test_commit_flushes_entire_batch_in_one_push() {
        let client = Arc::new(MockSyncClient::new("true"));
        let mut sync = synchronizer(client.clone());

        sync.stage_add(document("a.txt", "\na"));
        sync.stage_update(document("b.txt", "\nb"));
        sync.stage_remove(StructuredDocument::removal(DocumentId::derive("docs", "c.txt")));
        assert_eq!(sync.staged_count(), 3);

        let outcome = sync.commit().await.unwrap();
        assert!(outcome.success);
        assert_eq!(sync.staged_count(), 0);

        let batches = client.pushed_batches();
        assert_eq!(batches.len(), 1);
        let kinds: Vec<MutationKind> = batches[0].iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![MutationKind::Add, MutationKind::Update, MutationKind::Delete]
        );
    }

    #[tokio::test]
    async fn test_staging_same_identifier_twice_records_both_in_order() {
        let client = Arc::new(MockSyncClient::new("true"));
        let mut sync = synchronizer(client.clone());

        sync.stage_update(document("a.txt", "\nfirst"));
        sync.stage_update(document("a.txt", "\nsecond"));

        sync.commit().await.unwrap();

        let batches = client.pushed_batches();
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[0][0].document.content.as_deref(), Some("\nfirst"));
        assert_eq!(batches[0][1].document.content.as_deref(), Some("\nsecond"));
    }

    #[tokio::test]
    async fn test_empty_batch_still_commits() {
        let client = Arc::new(MockSyncClient::new("true"));
        let mut sync = synchronizer(client.clone());

        let outcome = sync.commit().await.unwrap();
        assert!(outcome.success);

        assert_eq!(client.push_count.load(Ordering::SeqCst), 1);
        assert!(client.pushed_batches()[0].is_empty());
    }

    #[tokio::test]
    async fn test_rejected_status_is_complete_but_unsuccessful() {
        let client = Arc::new(MockSyncClient::new("false"));
        let mut sync = synchronizer(client.clone());

        sync.stage_add(document("a.txt", "\na"));

        let outcome = sync.commit().await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.raw_status, "false");
        assert_eq!(client.push_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_push_failure_maps_to_commit_error() {
        let client = Arc::new(MockSyncClient::failing());
        let mut sync = synchronizer(client);

        sync.stage_add(document("a.txt", "\na"));

        let result = sync.commit().await;
        assert!(matches!(result, Err(PipelineError::Commit(_))));
    }
}
