use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

use super::{MessageStore, StoreError, MESSAGE_ATTRIBUTE};
use crate::config::Config;
use crate::model::MessageRecord;

/// DynamoDB table with a single string partition key.
#[derive(Debug, Clone)]
pub struct DynamoMessageStore {
    client: Client,
    table_name: String,
    partition_key: String,
}

impl DynamoMessageStore {
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            partition_key: partition_key.into(),
        }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, &config.table_name, &config.partition_key)
    }

    fn key(&self, message_id: &str) -> HashMap<String, AttributeValue> {
        let mut key = HashMap::new();
        key.insert(
            self.partition_key.clone(),
            AttributeValue::S(message_id.to_string()),
        );
        key
    }

    fn record_from_item(
        &self,
        item: &HashMap<String, AttributeValue>,
    ) -> Result<MessageRecord, StoreError> {
        let message_id = item
            .get(&self.partition_key)
            .and_then(|v| v.as_s().ok())
            .ok_or_else(|| StoreError::MalformedItem(format!("missing {}", self.partition_key)))?;
        let message = item
            .get(MESSAGE_ATTRIBUTE)
            .and_then(|v| v.as_s().ok())
            .ok_or_else(|| StoreError::MalformedItem(format!("missing {}", MESSAGE_ATTRIBUTE)))?;
        Ok(MessageRecord::new(message_id, message))
    }
}

#[async_trait]
impl MessageStore for DynamoMessageStore {
    async fn put(&self, record: &MessageRecord) -> Result<(), StoreError> {
        let mut item = self.key(&record.message_id);
        item.insert(
            MESSAGE_ATTRIBUTE.to_string(),
            AttributeValue::S(record.message.clone()),
        );

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(StoreError::request)?;
        Ok(())
    }

    async fn get(&self, message_id: &str) -> Result<Option<MessageRecord>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .set_key(Some(self.key(message_id)))
            .send()
            .await
            .map_err(StoreError::request)?;

        output
            .item()
            .map(|item| self.record_from_item(item))
            .transpose()
    }

    async fn update_message(&self, message_id: &str, message: &str) -> Result<(), StoreError> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .set_key(Some(self.key(message_id)))
            .update_expression("SET #message = :updatedMessage")
            .expression_attribute_names("#message", MESSAGE_ATTRIBUTE)
            .expression_attribute_values(":updatedMessage", AttributeValue::S(message.to_string()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(StoreError::request)?;

        tracing::debug!(attributes = ?output.attributes(), "item updated");
        Ok(())
    }

    async fn delete(&self, message_id: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .set_key(Some(self.key(message_id)))
            .send()
            .await
            .map_err(StoreError::request)?;
        Ok(())
    }
}
