//! Content fetcher for non-delete events.
//!
//! Wraps the object store client and accumulates content line by line, each
//! line prefixed with a line break. The prefix applies to the first line as
//! well, so non-empty fetched content always starts with a separator.

use std::sync::Arc;

use tracing::debug;

use crate::errors::PipelineError;
use object_indexer_repository::ObjectStoreClient;

/// Fetcher that retrieves object content for indexing.
pub struct ContentFetcher {
    store: Arc<dyn ObjectStoreClient>,
}

impl ContentFetcher {
    /// Create a new fetcher over the given object store client.
    pub fn new(store: Arc<dyn ObjectStoreClient>) -> Self {
        Self { store }
    }

    /// Fetch an object and return its line-accumulated text content.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The content with every line prefixed by `\n`
    /// * `Err(PipelineError::ContentFetch)` - If the object cannot be
    ///   retrieved or read
    pub async fn fetch(
        &self,
        container_name: &str,
        object_key: &str,
    ) -> Result<String, PipelineError> {
        let raw = self.store.get_object(container_name, object_key).await?;
        let content = accumulate_lines(&raw);

        debug!(
            container = %container_name,
            key = %object_key,
            lines = raw.lines().count(),
            "Accumulated object content"
        );

        Ok(content)
    }
}

/// Prefix every line of `raw` with a line break, the first line included.
///
/// Line terminators (`\n` and `\r\n`) are stripped from the source before
/// prefixing, matching buffered line reads.
fn accumulate_lines(raw: &str) -> String {
    let mut content = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        content.push('\n');
        content.push_str(line);
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use object_indexer_repository::ObjectStoreError;

    struct FixedStore {
        content: String,
    }

    #[async_trait]
    impl ObjectStoreClient for FixedStore {
        async fn get_object(
            &self,
            _container_name: &str,
            _object_key: &str,
        ) -> Result<String, ObjectStoreError> {
            Ok(self.content.clone())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ObjectStoreClient for FailingStore {
        async fn get_object(
            &self,
            container_name: &str,
            object_key: &str,
        ) -> Result<String, ObjectStoreError> {
            Err(ObjectStoreError::not_found(format!(
                "{}/{}",
                container_name, object_key
            )))
        }
    }

    #[test]
    fn test_accumulate_prefixes_every_line() {
        assert_eq!(accumulate_lines("line1\nline2"), "\nline1\nline2");
    }

    #[test]
    fn test_accumulate_single_line() {
        assert_eq!(accumulate_lines("only"), "\nonly");
    }

    #[test]
    fn test_accumulate_empty_content() {
        assert_eq!(accumulate_lines(""), "");
    }

    #[test]
    fn test_accumulate_drops_trailing_terminator() {
        assert_eq!(accumulate_lines("a\n"), "\na");
    }

    #[test]
    fn test_accumulate_strips_carriage_returns() {
        assert_eq!(accumulate_lines("a\r\nb"), "\na\nb");
    }

    #[tokio::test]
    async fn test_fetch_returns_accumulated_content() {
        let fetcher = ContentFetcher::new(Arc::new(FixedStore {
            content: "line1\nline2".to_string(),
        }));

        let content = fetcher.fetch("docs", "a.txt").await.unwrap();
        assert_eq!(content, "\nline1\nline2");
    }

    #[tokio::test]
    async fn test_fetch_propagates_store_errors() {
        let fetcher = ContentFetcher::new(Arc::new(FailingStore));

        let result = fetcher.fetch("docs", "missing.txt").await;
        assert!(matches!(result, Err(PipelineError::ContentFetch(_))));
    }
}
