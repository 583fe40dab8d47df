use async_trait::async_trait;
use crate::domain::error::Result;

/// Storage verbs shared by every resource type. A key with no row comes back from `get`
/// as `T::default()`, not as an error.
#[async_trait]
pub trait CrudRepository<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>>;
    async fn get(&self, id: &str) -> Result<T>;
    async fn create(&self, record: T) -> Result<T>;
    async fn update(&self, id: &str, record: T) -> Result<T>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Stores `value` encrypted under `name`. Without `overwrite` an existing entry is an error.
    async fn put_secret(&self, name: &str, value: &str, overwrite: bool) -> Result<()>;
    async fn get_secret(&self, name: &str) -> Result<String>;
    async fn delete_secret(&self, name: &str) -> Result<()>;
}

#[async_trait]
pub trait SqlConnector: Send + Sync {
    /// Builds a handle for `credentials` without touching the network.
    async fn open(&self, credentials: &str) -> Result<Box<dyn SqlConnection>>;
}

#[async_trait]
pub trait SqlConnection: Send {
    async fn ping(&mut self) -> Result<()>;
    async fn close(self: Box<Self>);
}
