use async_trait::async_trait;
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use tracing::{debug, error, info};
use crate::domain::{
    error::{HermesError, Result},
    ports::CrudRepository,
};
use super::attribute::{from_item, to_item};

/// Key attribute shared by every resource table.
const KEY: &str = "id";

pub struct DynamoCrudRepository<T> {
    client: Client,
    table_name: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> DynamoCrudRepository<T> {
    pub fn new(client: Client, table_name: String) -> Self {
        debug!("Initializing DynamoDB repository for table: {}", table_name);
        Self {
            client,
            table_name,
            _record: PhantomData,
        }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl<T> CrudRepository<T> for DynamoCrudRepository<T>
where
    T: Serialize + DeserializeOwned + Default + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<T>> {
        debug!("Scanning table: {}", self.table_name);

        let mut records = Vec::new();
        let mut start_key = None;
        loop {
            let response = self.client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| {
                    error!("Failed to scan table {}: {}", self.table_name, e);
                    HermesError::Fetch
                })?;

            for item in response.items.unwrap_or_default() {
                let record = from_item(item).map_err(|e| {
                    error!("Failed to decode scanned item from {}: {}", self.table_name, e);
                    HermesError::Fetch
                })?;
                records.push(record);
            }

            match response.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    debug!("Scan of {} continues past page boundary", self.table_name);
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        info!("Fetched {} records from {}", records.len(), self.table_name);
        Ok(records)
    }

    async fn get(&self, id: &str) -> Result<T> {
        debug!("Fetching record {} from {}", id, self.table_name);

        let response = self.client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY, Self::key(id))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to get record {} from {}: {}", id, self.table_name, e);
                HermesError::Fetch
            })?;

        match response.item {
            Some(item) => from_item(item).map_err(|e| {
                error!("Failed to decode record {} from {}: {}", id, self.table_name, e);
                HermesError::Decode
            }),
            None => {
                debug!("No record {} in {}", id, self.table_name);
                Ok(T::default())
            }
        }
    }

    async fn create(&self, record: T) -> Result<T> {
        let item = to_item(&record).map_err(|e| {
            error!("Failed to encode record for {}: {}", self.table_name, e);
            HermesError::Encode
        })?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to put record into {}: {}", self.table_name, e);
                HermesError::Write
            })?;

        debug!("Stored record in {}", self.table_name);
        Ok(record)
    }

    // The item key comes from the record body, so this is the same put as `create`.
    async fn update(&self, id: &str, record: T) -> Result<T> {
        debug!("Replacing record {} in {}", id, self.table_name);
        self.create(record).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(KEY, Self::key(id))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to delete record {} from {}: {}", id, self.table_name, e);
                HermesError::Delete
            })?;

        info!("Deleted record {} from {}", id, self.table_name);
        Ok(())
    }
}
