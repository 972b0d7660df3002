//! Storage contract for message records.

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use thiserror::Error;

use crate::model::MessageRecord;

mod dynamo;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;

pub use dynamo::DynamoMessageStore;

/// Attribute holding the message text.
pub const MESSAGE_ATTRIBUTE: &str = "Message";

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The key-value request itself failed (throttling, network, permissions...).
    /// `message` is the full rendered chain, `source` the original error.
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: BoxError,
    },
    #[error("malformed item: {0}")]
    MalformedItem(String),
}

impl StoreError {
    pub fn request<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Request {
            message: DisplayErrorContext(&err).to_string(),
            source: Box::new(err),
        }
    }
}

/// One bounded operation per call, keyed by the message id.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Writes the record, replacing any record with the same id.
    async fn put(&self, record: &MessageRecord) -> Result<(), StoreError>;

    async fn get(&self, message_id: &str) -> Result<Option<MessageRecord>, StoreError>;

    /// Sets the `Message` field of the record, creating it when absent.
    async fn update_message(&self, message_id: &str, message: &str) -> Result<(), StoreError>;

    /// Removes the record. Removing an absent id is not an error.
    async fn delete(&self, message_id: &str) -> Result<(), StoreError>;
}
