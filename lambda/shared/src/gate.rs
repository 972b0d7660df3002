//! A poor man's way to restrict who can touch the table.
//!
//! This is a placeholder, not a security boundary: the secret travels in the
//! query string and is compared as plain text.

use lambda_http::{Request, RequestExt};

pub const VALIDATION_KEY_PARAM: &str = "validationKey";

/// Decides whether a request may proceed to the store.
pub trait AccessGate: Send + Sync {
    fn should_process_event(&self, event: &Request) -> bool;
}

/// Accepts a request iff its `validationKey` query parameter equals the
/// configured secret exactly. A repeated parameter is decided by its last
/// value, as API Gateway's single-value query map does.
#[derive(Debug, Clone)]
pub struct SharedSecretGate {
    secret: Option<String>,
}

impl SharedSecretGate {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }
}

impl AccessGate for SharedSecretGate {
    fn should_process_event(&self, event: &Request) -> bool {
        let params = event.query_string_parameters();
        let presented = match params
            .all(VALIDATION_KEY_PARAM)
            .and_then(|values| values.last().copied())
        {
            Some(key) if !key.is_empty() => key,
            _ => {
                tracing::info!("validation key is missing");
                return false;
            }
        };

        if self.secret.as_deref() != Some(presented) {
            tracing::info!("validation key is present, but invalid");
            return false;
        }

        tracing::debug!("validation key accepted");
        true
    }
}
