use tracing::debug;
use crate::domain::error::{HermesError, Result};

/// LocalStack endpoint used when `IS_DEV=true` and no explicit endpoint is configured.
pub const DEV_ENDPOINT: &str = "http://host.docker.internal:4566";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    DynamoDb,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub table_name: String,
    pub endpoint_url: Option<String>,
    pub storage_backend: StorageBackend,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests need not mutate the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let table_name = lookup("TABLE_NAME")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| HermesError::Config("TABLE_NAME must be set".to_string()))?;

        let endpoint_url = lookup("AWS_ENDPOINT_URL")
            .filter(|value| !value.trim().is_empty())
            .or_else(|| {
                (lookup("IS_DEV").as_deref() == Some("true")).then(|| DEV_ENDPOINT.to_string())
            });

        let storage_backend = match lookup("STORAGE_BACKEND").as_deref() {
            None | Some("") | Some("dynamodb") => StorageBackend::DynamoDb,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(HermesError::Config(format!("unknown STORAGE_BACKEND: {other}")))
            }
        };

        let config = Self {
            table_name,
            endpoint_url,
            storage_backend,
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}
