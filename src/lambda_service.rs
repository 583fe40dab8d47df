use std::sync::Arc;
use aws_config::{BehaviorVersion, SdkConfig};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use tracing::{debug, info, warn};
use crate::{
    application::{ConnectionService, CrudService, DatasetService},
    config::{AppConfig, StorageBackend},
    domain::{
        error::Result,
        models::Dataset,
        ports::{CrudRepository, SecretStore},
        resource::Resource,
    },
    infrastructure::{
        dynamodb::DynamoCrudRepository,
        memory::InMemoryCrudRepository,
        postgres::PostgresConnector,
        ssm::SsmSecretStore,
    },
    lambda::{route, route_datasets, ApiGatewayProxyRequest},
};

/// Everything a handler needs, built once per cold start and shared by reference across
/// invocations.
pub struct AppContext {
    config: AppConfig,
    aws_config: SdkConfig,
}

impl AppContext {
    pub async fn load() -> Result<Self> {
        debug!("Initializing Lambda context");
        let config = AppConfig::from_env()?;

        let mut aws_config_builder = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint_url) = &config.endpoint_url {
            info!("Using custom AWS endpoint: {}", endpoint_url);
            aws_config_builder = aws_config_builder.endpoint_url(endpoint_url);
        }
        let aws_config = aws_config_builder.load().await;
        debug!("AWS region: {:?}", aws_config.region());

        Ok(Self { config, aws_config })
    }

    pub fn repository<T: Resource>(&self) -> Arc<dyn CrudRepository<T>> {
        match self.config.storage_backend {
            StorageBackend::DynamoDb => {
                info!("{} table: {}", T::LABEL, self.config.table_name);
                let client = aws_sdk_dynamodb::Client::new(&self.aws_config);
                Arc::new(DynamoCrudRepository::new(client, self.config.table_name.clone()))
            }
            StorageBackend::Memory => {
                warn!("Using in-memory {} storage; records live only as long as this container", T::KIND);
                Arc::new(InMemoryCrudRepository::new())
            }
        }
    }

    pub fn secret_store(&self) -> Arc<dyn SecretStore> {
        Arc::new(SsmSecretStore::new(aws_sdk_ssm::Client::new(&self.aws_config)))
    }

    pub fn crud_service<T: Resource>(&self) -> CrudService<T> {
        CrudService::new(self.repository())
    }

    pub fn dataset_services(&self) -> (DatasetService, ConnectionService) {
        let secrets = self.secret_store();
        let datasets = DatasetService::new(self.repository::<Dataset>(), Arc::clone(&secrets));
        let connections = ConnectionService::new(secrets, Arc::new(PostgresConnector));
        (datasets, connections)
    }
}

/// Serves a plain CRUD resource (campaigns, notifications) until the runtime shuts down.
pub async fn run_crud<T: Resource>() -> std::result::Result<(), Error> {
    let context = AppContext::load().await?;
    let service = context.crud_service::<T>();
    let service = &service;
    info!("{} handler ready", T::LABEL);

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            Ok::<_, Error>(route(service, &event.payload).await)
        },
    ))
    .await
}

pub async fn run_datasets() -> std::result::Result<(), Error> {
    let context = AppContext::load().await?;
    let (datasets, connections) = context.dataset_services();
    let (datasets, connections) = (&datasets, &connections);
    info!("Dataset handler ready");

    lambda_runtime::run(service_fn(
        move |event: LambdaEvent<ApiGatewayProxyRequest>| async move {
            Ok::<_, Error>(route_datasets(datasets, connections, &event.payload).await)
        },
    ))
    .await
}
