use std::sync::Arc;
use tracing::{debug, error, info};
use crate::domain::{
    error::{HermesError, Result},
    models::Connection,
    ports::{SecretStore, SqlConnector},
    validation::uses_secret_store,
};

/// One-shot connectivity check for dataset credentials.
pub struct ConnectionService {
    secrets: Arc<dyn SecretStore>,
    connector: Arc<dyn SqlConnector>,
}

impl ConnectionService {
    pub fn new(secrets: Arc<dyn SecretStore>, connector: Arc<dyn SqlConnector>) -> Self {
        Self { secrets, connector }
    }

    pub async fn ensure_connection(&self, body: &str) -> Result<()> {
        let connection: Connection = serde_json::from_str(body).map_err(|e| {
            error!("Rejected connection body: {}", e);
            HermesError::InvalidConnectionData
        })?;

        let credentials = self.resolve_credentials(&connection).await?;
        self.probe(&credentials).await
    }

    /// For `ssm` the supplied credentials name the parameter holding the DSN.
    async fn resolve_credentials(&self, connection: &Connection) -> Result<String> {
        if !uses_secret_store(&connection.provider) {
            return Ok(connection.credentials.clone());
        }

        debug!("Resolving credentials from secret {}", connection.credentials);
        self.secrets
            .get_secret(&connection.credentials)
            .await
            .map_err(|e| {
                error!("Could not resolve secret {}: {}", connection.credentials, e);
                HermesError::SecretRetrieval
            })
    }

    async fn probe(&self, credentials: &str) -> Result<()> {
        let mut handle = self.connector.open(credentials).await?;
        let outcome = handle.ping().await;
        handle.close().await;

        if outcome.is_ok() {
            info!("Connection test succeeded");
        }
        outcome
    }
}
