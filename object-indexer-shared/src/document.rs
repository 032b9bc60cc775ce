//! Document identity and the structured document record.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed namespace for name-based document identifier derivation.
const DOCUMENT_ID_NAMESPACE: Uuid = Uuid::from_u128(0x7b1e9c4a_5d28_4c6f_9a3e_d0c842b517f1);

/// Stable identifier for an indexed document.
///
/// Derived deterministically from the (container, key) pair: identical pairs
/// always produce the same identifier, across runs and processes. Distinct
/// pairs produce distinct identifiers with high probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Derive the identifier for an object from its container and key.
    ///
    /// Uses a name-based (SHA-1) UUID over `container/key` under a fixed
    /// namespace. Container names cannot contain `/`, so the joined name is
    /// unambiguous.
    pub fn derive(container_name: &str, object_key: &str) -> Self {
        let name = format!("{}/{}", container_name, object_key);
        Self(Uuid::new_v5(&DOCUMENT_ID_NAMESPACE, name.as_bytes()))
    }

    /// The underlying UUID value.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The structured record indexed per object.
///
/// Fields serialize in declaration order with absent fields omitted, so a
/// removal document carries only its identifier on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredDocument {
    /// Stable document identifier.
    pub identifier: DocumentId,
    /// Object key, used as the display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw text content of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Public URL of the object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl StructuredDocument {
    /// Create a removal document carrying only the identifier.
    pub fn removal(identifier: DocumentId) -> Self {
        Self {
            identifier,
            title: None,
            content: None,
            subject: None,
        }
    }

    /// Create a fully populated document for an add or update.
    pub fn indexed(
        identifier: DocumentId,
        title: impl Into<String>,
        content: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            identifier,
            title: Some(title.into()),
            content: Some(content.into()),
            subject: Some(subject.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic() {
        let a = DocumentId::derive("docs", "guide.txt");
        let b = DocumentId::derive("docs", "guide.txt");
        assert_eq!(a, b);
    }

    #[test]
    fn test_derive_distinguishes_pairs() {
        let a = DocumentId::derive("docs", "guide.txt");
        let b = DocumentId::derive("docs", "other.txt");
        let c = DocumentId::derive("media", "guide.txt");
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_derive_does_not_conflate_container_and_key() {
        // The separator keeps (container, key) splits apart.
        let a = DocumentId::derive("docs", "a/guide.txt");
        let b = DocumentId::derive("docs/a", "guide.txt");
        assert_ne!(a, b);
    }

    #[test]
    fn test_removal_document_serializes_identifier_only() {
        let doc = StructuredDocument::removal(DocumentId::derive("docs", "guide.txt"));
        let json = serde_json::to_value(&doc).unwrap();

        let map = json.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("identifier"));
    }

    #[test]
    fn test_indexed_document_serializes_all_fields_in_order() {
        let doc = StructuredDocument::indexed(
            DocumentId::derive("docs", "guide.txt"),
            "guide.txt",
            "\nhello",
            "http://docs.oss.example.com/guide.txt",
        );
        let json = serde_json::to_string(&doc).unwrap();

        let identifier_pos = json.find("identifier").unwrap();
        let title_pos = json.find("title").unwrap();
        let content_pos = json.find("content").unwrap();
        let subject_pos = json.find("subject").unwrap();
        assert!(identifier_pos < title_pos);
        assert!(title_pos < content_pos);
        assert!(content_pos < subject_pos);
    }

    #[test]
    fn test_document_roundtrip() {
        let doc = StructuredDocument::indexed(
            DocumentId::derive("docs", "guide.txt"),
            "guide.txt",
            "\nhello",
            "http://docs.oss.example.com/guide.txt",
        );
        let json = serde_json::to_string(&doc).unwrap();
        let back: StructuredDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
