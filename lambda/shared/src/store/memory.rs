//! In-process stand-in for the table, used by handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{MessageStore, StoreError};
use crate::model::MessageRecord;

#[derive(Debug, Default)]
pub struct InMemoryMessageStore {
    items: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with `StoreError::Request`.
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    /// Number of operations attempted so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> Vec<MessageRecord> {
        self.items
            .lock()
            .map(|items| {
                items
                    .iter()
                    .map(|(id, message)| MessageRecord::new(id, message))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::request(io::Error::other(
                "ProvisionedThroughputExceededException: rate exceeded",
            )));
        }
        self.items
            .lock()
            .map_err(|_| StoreError::request(io::Error::other("store lock poisoned")))
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn put(&self, record: &MessageRecord) -> Result<(), StoreError> {
        self.begin()?
            .insert(record.message_id.clone(), record.message.clone());
        Ok(())
    }

    async fn get(&self, message_id: &str) -> Result<Option<MessageRecord>, StoreError> {
        Ok(self
            .begin()?
            .get(message_id)
            .map(|message| MessageRecord::new(message_id, message)))
    }

    async fn update_message(&self, message_id: &str, message: &str) -> Result<(), StoreError> {
        self.begin()?
            .insert(message_id.to_string(), message.to_string());
        Ok(())
    }

    async fn delete(&self, message_id: &str) -> Result<(), StoreError> {
        self.begin()?.remove(message_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_replaces_and_delete_is_idempotent() {
        let store = InMemoryMessageStore::new();
        store.put(&MessageRecord::new("m1", "hello")).await.unwrap();
        store.put(&MessageRecord::new("m1", "hi")).await.unwrap();
        assert_eq!(
            store.get("m1").await.unwrap(),
            Some(MessageRecord::new("m1", "hi"))
        );

        store.delete("m1").await.unwrap();
        store.delete("m1").await.unwrap();
        assert_eq!(store.get("m1").await.unwrap(), None);
        assert_eq!(store.calls(), 6);
    }

    #[tokio::test]
    async fn failing_store_counts_calls() {
        let store = InMemoryMessageStore::failing();
        assert!(store.get("m1").await.is_err());
        assert_eq!(store.calls(), 1);
    }
}
