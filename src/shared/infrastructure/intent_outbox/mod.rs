use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

/// One published habit event, addressed by its stream position.
///
/// `(stream_id, stream_version)` identifies a row; enqueuing the same pair twice is a
/// `Duplicate` so a retried command can never publish an event twice.
#[derive(Debug, Clone)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    pub occurred_at: i64,
    pub payload: Json,
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("event {stream_id} v{stream_version} is already in the outbox")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("payload could not be encoded: {0}")]
    Validation(String),

    #[error("outbox unavailable: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;
