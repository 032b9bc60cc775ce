//! Document builder implementation.
//!
//! Assembles the structured document for a change event: only the identifier
//! for removals, plus title, content, and subject URL for adds and updates.

use object_indexer_shared::{ChangeEvent, DocumentId, StructuredDocument};

/// Scheme of the subject URL template `{scheme}://{container}.{endpoint}/{key}`.
const SUBJECT_URL_SCHEME: &str = "http";

/// Builder that assembles structured documents from change events.
pub struct DocumentBuilder {
    display_endpoint: String,
}

impl DocumentBuilder {
    /// Create a builder using the given display endpoint for subject URLs.
    pub fn new(display_endpoint: impl Into<String>) -> Self {
        Self {
            display_endpoint: display_endpoint.into(),
        }
    }

    /// Build a removal document for a delete event.
    ///
    /// The document carries only the identifier, which is sufficient for
    /// removal-by-identifier.
    pub fn removal(&self, event: &ChangeEvent) -> StructuredDocument {
        StructuredDocument::removal(DocumentId::derive(&event.container_name, &event.object_key))
    }

    /// Build a fully populated document for a create or update event.
    ///
    /// # Arguments
    ///
    /// * `event` - The change event the document describes
    /// * `content` - The fetched, line-accumulated object content
    pub fn indexed(&self, event: &ChangeEvent, content: impl Into<String>) -> StructuredDocument {
        StructuredDocument::indexed(
            DocumentId::derive(&event.container_name, &event.object_key),
            event.object_key.clone(),
            content,
            self.subject_url(&event.container_name, &event.object_key),
        )
    }

    /// Build the public URL of an object from the configured display endpoint.
    fn subject_url(&self, container_name: &str, object_key: &str) -> String {
        format!(
            "{}://{}.{}/{}",
            SUBJECT_URL_SCHEME, container_name, self.display_endpoint, object_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> DocumentBuilder {
        DocumentBuilder::new("oss.example.com")
    }

    #[test]
    fn test_removal_document_carries_identifier_only() {
        let event = ChangeEvent::new("ObjectRemoved:DeleteObject", "docs", "guide.txt");
        let doc = builder().removal(&event);

        assert_eq!(doc.identifier, DocumentId::derive("docs", "guide.txt"));
        assert!(doc.title.is_none());
        assert!(doc.content.is_none());
        assert!(doc.subject.is_none());
    }

    #[test]
    fn test_indexed_document_populates_all_fields() {
        let event = ChangeEvent::new("ObjectCreated:PutObject", "docs", "guide.txt");
        let doc = builder().indexed(&event, "\nline1\nline2");

        assert_eq!(doc.identifier, DocumentId::derive("docs", "guide.txt"));
        assert_eq!(doc.title.as_deref(), Some("guide.txt"));
        assert_eq!(doc.content.as_deref(), Some("\nline1\nline2"));
        assert_eq!(
            doc.subject.as_deref(),
            Some("http://docs.oss.example.com/guide.txt")
        );
    }

    #[test]
    fn test_subject_url_keeps_nested_keys() {
        let event = ChangeEvent::new("ObjectCreated:PutObject", "docs", "2024/q1/report.txt");
        let doc = builder().indexed(&event, "");

        assert_eq!(
            doc.subject.as_deref(),
            Some("http://docs.oss.example.com/2024/q1/report.txt")
        );
    }

    #[test]
    fn test_removal_and_indexed_share_identifier_derivation() {
        let event = ChangeEvent::new("ObjectCreated:PutObject", "docs", "guide.txt");
        let builder = builder();

        assert_eq!(
            builder.removal(&event).identifier,
            builder.indexed(&event, "").identifier
        );
    }
}
