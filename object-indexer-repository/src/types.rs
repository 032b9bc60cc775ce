//! Request and response types for document batch synchronization.

use serde::Serialize;

use object_indexer_shared::StructuredDocument;

/// Mutation kinds accepted by the search application's bulk endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    /// Add a new document.
    Add,
    /// Update an existing document.
    Update,
    /// Remove a document by identifier.
    Delete,
}

/// A single staged mutation awaiting commit.
///
/// Serializes to the bulk push entry shape: the mutation kind as `cmd` and
/// the document under `fields`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StagedMutation {
    /// The kind of mutation to apply.
    #[serde(rename = "cmd")]
    pub kind: MutationKind,
    /// The document the mutation applies to.
    #[serde(rename = "fields")]
    pub document: StructuredDocument,
}

impl StagedMutation {
    /// Stage a document addition.
    pub fn add(document: StructuredDocument) -> Self {
        Self {
            kind: MutationKind::Add,
            document,
        }
    }

    /// Stage a document update.
    pub fn update(document: StructuredDocument) -> Self {
        Self {
            kind: MutationKind::Update,
            document,
        }
    }

    /// Stage a document removal.
    pub fn delete(document: StructuredDocument) -> Self {
        Self {
            kind: MutationKind::Delete,
            document,
        }
    }
}

/// Result of committing one pending batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Whether the search application reported the commit as successful.
    pub success: bool,
    /// Raw status string returned by the search application.
    pub raw_status: String,
}

impl CommitOutcome {
    /// Build an outcome from the raw status string of a push response.
    ///
    /// The status is compared case-insensitively against the literal
    /// `"true"`; any other value, including an empty one, reads as failure.
    pub fn from_raw_status(raw_status: impl Into<String>) -> Self {
        let raw_status = raw_status.into();
        let success = raw_status.eq_ignore_ascii_case("true");
        Self {
            success,
            raw_status,
        }
    }
}
