use async_trait::async_trait;
use aws_sdk_ssm::{types::ParameterType, Client};
use tracing::{debug, error, info};
use crate::domain::{
    error::{HermesError, Result},
    ports::SecretStore,
};

/// Secrets kept as SSM `SecureString` parameters, one per name.
pub struct SsmSecretStore {
    client: Client,
}

impl SsmSecretStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretStore for SsmSecretStore {
    async fn put_secret(&self, name: &str, value: &str, overwrite: bool) -> Result<()> {
        debug!("Writing SSM parameter {} (overwrite: {})", name, overwrite);

        self.client
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(ParameterType::SecureString)
            .data_type("text")
            .overwrite(overwrite)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to put SSM parameter {}: {}", name, e);
                HermesError::SecretStore
            })?;

        info!("Stored credentials in SSM parameter {}", name);
        Ok(())
    }

    async fn get_secret(&self, name: &str) -> Result<String> {
        debug!("Reading SSM parameter {}", name);

        let response = self.client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to get SSM parameter {}: {}", name, e);
                HermesError::SecretRetrieval
            })?;

        response
            .parameter
            .and_then(|parameter| parameter.value)
            .ok_or_else(|| {
                error!("SSM parameter {} has no value", name);
                HermesError::SecretRetrieval
            })
    }

    async fn delete_secret(&self, name: &str) -> Result<()> {
        self.client
            .delete_parameter()
            .name(name)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to delete SSM parameter {}: {}", name, e);
                HermesError::SecretStore
            })?;

        info!("Deleted SSM parameter {}", name);
        Ok(())
    }
}
