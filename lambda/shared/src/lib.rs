//! Pieces shared by the message lambdas: the record model, configuration
//! resolved at cold start, the access gate and the storage contract.

pub mod config;
pub mod cors;
pub mod gate;
pub mod model;
pub mod store;

pub use config::{Config, ConfigError};
pub use gate::{AccessGate, SharedSecretGate};
pub use model::{CreateMessageInput, ErrorResponse, MessageRecord, UpdateMessageInput};
pub use store::{DynamoMessageStore, MessageStore, StoreError};

#[cfg(any(test, feature = "test-util"))]
pub use store::memory::InMemoryMessageStore;
