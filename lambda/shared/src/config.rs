use thiserror::Error;

pub const DEFAULT_PARTITION_KEY: &str = "MessageId";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

/// Settings resolved once at cold start and handed to the handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub table_name: String,
    pub partition_key: String,
    /// Shared secret for the access gate. `None` rejects every gated request.
    pub validation_key: Option<String>,
}

impl Config {
    /// Reads `TABLE_NAME`, `PARTITION_KEY` and `POOR_MANS_API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let table_name = non_empty("TABLE_NAME").ok_or(ConfigError::Missing("TABLE_NAME"))?;
        let partition_key =
            non_empty("PARTITION_KEY").unwrap_or_else(|| DEFAULT_PARTITION_KEY.to_string());
        let validation_key = non_empty("POOR_MANS_API_KEY");

        Ok(Self {
            table_name,
            partition_key,
            validation_key,
        })
    }
}
