//! Change event types and classification tables.
//!
//! Defines the event structure decoded from object storage notifications and
//! the fixed name sets used to classify raw event names.

/// Event names that signal a newly created object.
pub const CREATE_EVENT_NAMES: &[&str] =
    &["ObjectCreated:PutObject", "ObjectCreated:PostObject"];

/// Event names that signal an appended (updated) object.
pub const UPDATE_EVENT_NAMES: &[&str] = &["ObjectCreated:AppendObject"];

/// Event names that signal a removed object.
pub const DELETE_EVENT_NAMES: &[&str] =
    &["ObjectRemoved:DeleteObject", "ObjectRemoved:DeleteObjects"];

/// Kinds of object storage change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A new object was created.
    Create,
    /// An existing object was appended to.
    Update,
    /// An object was removed.
    Delete,
    /// The event name matched none of the known sets.
    Unknown,
}

impl EventKind {
    /// Classify a raw event name by exact membership in the fixed name sets.
    ///
    /// Matching is case-sensitive with no normalization; names outside the
    /// three sets classify as [`EventKind::Unknown`]. Delete is tested first
    /// so removal events short-circuit ahead of the content-fetching paths.
    pub fn classify(event_name: &str) -> Self {
        if DELETE_EVENT_NAMES.contains(&event_name) {
            Self::Delete
        } else if CREATE_EVENT_NAMES.contains(&event_name) {
            Self::Create
        } else if UPDATE_EVENT_NAMES.contains(&event_name) {
            Self::Update
        } else {
            Self::Unknown
        }
    }
}

/// A single object storage change notification.
///
/// Immutable once decoded; consumed exactly once by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Raw event name as delivered in the notification.
    pub event_name: String,
    /// Bucket holding the affected object.
    pub container_name: String,
    /// Key of the affected object within the bucket.
    pub object_key: String,
}

impl ChangeEvent {
    /// Create a new change event.
    pub fn new(
        event_name: impl Into<String>,
        container_name: impl Into<String>,
        object_key: impl Into<String>,
    ) -> Self {
        Self {
            event_name: event_name.into(),
            container_name: container_name.into(),
            object_key: object_key.into(),
        }
    }

    /// Classify this event's raw name.
    pub fn kind(&self) -> EventKind {
        EventKind::classify(&self.event_name)
    }
}
