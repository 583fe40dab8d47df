use async_trait::async_trait;
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};
use tracing::debug;
use crate::domain::{error::Result, ports::CrudRepository, resource::Resource};

/// Process-local table keyed by record id. Same upsert and no-op delete semantics as the
/// DynamoDB repository.
pub struct InMemoryCrudRepository<T> {
    rows: Mutex<BTreeMap<String, T>>,
}

impl<T> Default for InMemoryCrudRepository<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<T: Resource> InMemoryCrudRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let rows = records
            .into_iter()
            .map(|record| (record.id().to_string(), record))
            .collect();
        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    fn rows(&self) -> MutexGuard<'_, BTreeMap<String, T>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<T: Resource> CrudRepository<T> for InMemoryCrudRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        Ok(self.rows().values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<T> {
        Ok(self.rows().get(id).cloned().unwrap_or_default())
    }

    async fn create(&self, record: T) -> Result<T> {
        debug!("Storing {} {} in memory", T::KIND, record.id());
        self.rows().insert(record.id().to_string(), record.clone());
        Ok(record)
    }

    async fn update(&self, _id: &str, record: T) -> Result<T> {
        self.create(record).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.rows().remove(id);
        Ok(())
    }
}
