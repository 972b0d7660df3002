use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored message. `MessageId` is the partition key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(rename = "MessageId")]
    pub message_id: String,
    #[serde(rename = "Message")]
    pub message: String,
}

impl MessageRecord {
    pub fn new(message_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message_id: message_id.into(),
            message: message.into(),
        }
    }

    /// Builds a record under a freshly generated v4 UUID.
    pub fn generate(message: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4().to_string(), message)
    }
}

/// Body of `POST /messages`. Both fields are optional on the wire so that
/// a missing `Message` is reported by validation rather than by the parser.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessageInput {
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl CreateMessageInput {
    /// Returns the record to write, or `None` when `Message` is missing or empty.
    /// An absent or empty `MessageId` gets a generated one.
    pub fn into_record(self) -> Option<MessageRecord> {
        let message = self.message.filter(|m| !m.is_empty())?;
        match self.message_id.filter(|id| !id.is_empty()) {
            Some(id) => Some(MessageRecord::new(id, message)),
            None => Some(MessageRecord::generate(message)),
        }
    }
}

/// Body of `PUT /messages`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMessageInput {
    #[serde(rename = "MessageId", default)]
    pub message_id: Option<String>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl UpdateMessageInput {
    /// Both fields must be present and non-empty.
    pub fn into_record(self) -> Option<MessageRecord> {
        match (self.message_id, self.message) {
            (Some(id), Some(message)) if !id.is_empty() && !message.is_empty() => {
                Some(MessageRecord::new(id, message))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_wire_names() {
        let record = MessageRecord::new("m1", "hi");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"MessageId":"m1","Message":"hi"}"#);
    }

    #[test]
    fn create_input_generates_id_when_absent_or_empty() {
        let input: CreateMessageInput = serde_json::from_str(r#"{"Message":"hello"}"#).unwrap();
        let record = input.into_record().unwrap();
        assert!(!record.message_id.is_empty());
        assert!(Uuid::parse_str(&record.message_id).is_ok());
        assert_eq!(record.message, "hello");

        let input: CreateMessageInput =
            serde_json::from_str(r#"{"MessageId":"","Message":"hello"}"#).unwrap();
        assert!(!input.into_record().unwrap().message_id.is_empty());
    }

    #[test]
    fn create_input_keeps_supplied_id() {
        let input: CreateMessageInput =
            serde_json::from_str(r#"{"MessageId":"m1","Message":"hi"}"#).unwrap();
        assert_eq!(input.into_record(), Some(MessageRecord::new("m1", "hi")));
    }

    #[test]
    fn create_input_requires_message() {
        let input: CreateMessageInput = serde_json::from_str(r#"{"MessageId":"m1"}"#).unwrap();
        assert!(input.into_record().is_none());

        let input: CreateMessageInput = serde_json::from_str(r#"{"Message":""}"#).unwrap();
        assert!(input.into_record().is_none());
    }

    #[test]
    fn update_input_requires_both_fields() {
        let missing_id: UpdateMessageInput = serde_json::from_str(r#"{"Message":"bye"}"#).unwrap();
        assert!(missing_id.into_record().is_none());

        let empty_message: UpdateMessageInput =
            serde_json::from_str(r#"{"MessageId":"m1","Message":""}"#).unwrap();
        assert!(empty_message.into_record().is_none());

        let ok: UpdateMessageInput =
            serde_json::from_str(r#"{"MessageId":"m1","Message":"bye"}"#).unwrap();
        assert_eq!(ok.into_record(), Some(MessageRecord::new("m1", "bye")));
    }
}
