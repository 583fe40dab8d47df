use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::domain::{
    error::Result,
    models::Dataset,
    ports::{CrudRepository, SecretStore},
    resource::Resource,
    validation::{uses_secret_store, validate_provider, validate_type},
};
use super::{
    crud_service::CrudService,
    resource_service::{decode_body, ResourceService},
};

/// Dataset CRUD. Validation runs before any collaborator is called, and `ssm` credentials
/// are moved into the secret store under the dataset id before the record is written.
pub struct DatasetService {
    records: CrudService<Dataset>,
    secrets: Arc<dyn SecretStore>,
}

impl DatasetService {
    pub fn new(repo: Arc<dyn CrudRepository<Dataset>>, secrets: Arc<dyn SecretStore>) -> Self {
        Self {
            records: CrudService::new(repo),
            secrets,
        }
    }
}

#[async_trait]
impl ResourceService for DatasetService {
    type Record = Dataset;

    async fn fetch(&self, id: &str) -> Result<Dataset> {
        self.records.fetch(id).await
    }

    async fn fetch_all(&self) -> Result<Vec<Dataset>> {
        self.records.fetch_all().await
    }

    async fn create(&self, body: &str) -> Result<Dataset> {
        let mut dataset: Dataset = decode_body(body)?;
        let provider = validate_provider(&dataset.provider)?;
        validate_type(&dataset.kind)?;

        if provider.requires_secret_store() {
            debug!("Moving credentials of dataset {} into the secret store", dataset.id);
            self.secrets
                .put_secret(&dataset.id, &dataset.credentials, false)
                .await?;
            dataset.credentials = dataset.id.clone();
        }

        info!("Creating dataset {}", dataset.id);
        self.records.repository().create(dataset).await
    }

    async fn update(&self, body: &str) -> Result<Dataset> {
        let mut dataset: Dataset = decode_body(body)?;
        let provider = validate_provider(&dataset.provider)?;
        validate_type(&dataset.kind)?;

        let current = self.records.fetch_current(&dataset.id).await;
        if current.is_empty_sentinel() {
            warn!("Refusing to update missing dataset {}", dataset.id);
            return Err(Dataset::missing_on_update());
        }

        if provider.requires_secret_store() {
            let changed = dataset.credentials != current.credentials
                || !uses_secret_store(&current.provider);
            if changed {
                debug!("Credentials of dataset {} changed, overwriting secret", dataset.id);
                self.secrets
                    .put_secret(&dataset.id, &dataset.credentials, true)
                    .await?;
            }
            dataset.credentials = dataset.id.clone();
        }

        info!("Updating dataset {}", dataset.id);
        let id = dataset.id.clone();
        self.records.repository().update(&id, dataset).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let current = self.records.fetch_current(id).await;
        if current.is_empty_sentinel() {
            debug!("Dataset {} already absent, nothing to delete", id);
            return Ok(());
        }

        if uses_secret_store(&current.provider) {
            // Best effort: the record is removed even if the parameter lingers.
            if let Err(e) = self.secrets.delete_secret(id).await {
                warn!("Could not delete secret for dataset {}, continuing: {}", id, e);
            }
        }

        self.records.repository().delete(id).await?;
        info!("Deleted dataset {}", id);
        Ok(())
    }
}
