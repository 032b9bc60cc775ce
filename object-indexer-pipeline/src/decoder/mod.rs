//! Event decoder for object storage notification payloads.
//!
//! Parses the raw JSON notification into typed change events. A payload that
//! fails to parse or lacks the expected shape is rejected whole; there is no
//! partial decode.

use serde::Deserialize;
use tracing::debug;

use crate::errors::PipelineError;
use object_indexer_shared::ChangeEvent;

/// Top-level notification payload.
#[derive(Debug, Deserialize)]
struct NotificationPayload {
    events: Vec<EventEntry>,
}

/// One notification entry.
#[derive(Debug, Deserialize)]
struct EventEntry {
    #[serde(rename = "eventName")]
    event_name: String,
    oss: StorageSection,
}

#[derive(Debug, Deserialize)]
struct StorageSection {
    bucket: BucketSection,
    object: ObjectSection,
}

#[derive(Debug, Deserialize)]
struct BucketSection {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ObjectSection {
    key: String,
}

/// Decode a raw notification payload into an ordered list of change events.
///
/// # Arguments
///
/// * `payload` - The full raw payload text
///
/// # Returns
///
/// * `Ok(Vec<ChangeEvent>)` - The decoded events in payload order
/// * `Err(PipelineError::MalformedPayload)` - If the payload is not valid
///   JSON or lacks the expected shape
pub fn decode_payload(payload: &str) -> Result<Vec<ChangeEvent>, PipelineError> {
    let parsed: NotificationPayload =
        serde_json::from_str(payload).map_err(|e| PipelineError::malformed_payload(e.to_string()))?;

    let events: Vec<ChangeEvent> = parsed
        .events
        .into_iter()
        .map(|entry| {
            ChangeEvent::new(entry.event_name, entry.oss.bucket.name, entry.oss.object.key)
        })
        .collect();

    debug!(count = events.len(), "Decoded notification payload");

    Ok(events)
}
