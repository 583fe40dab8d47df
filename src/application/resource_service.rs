use async_trait::async_trait;
use serde::Serialize;
use tracing::error;
use crate::domain::{
    error::{HermesError, Result},
    resource::Resource,
};

/// The four operations every resource endpoint exposes, independent of transport.
#[async_trait]
pub trait ResourceService: Send + Sync {
    type Record: Serialize + Send + Sync;

    async fn fetch(&self, id: &str) -> Result<Self::Record>;
    async fn fetch_all(&self) -> Result<Vec<Self::Record>>;
    async fn create(&self, body: &str) -> Result<Self::Record>;
    async fn update(&self, body: &str) -> Result<Self::Record>;
    async fn delete(&self, id: &str) -> Result<()>;
}

pub fn decode_body<T: Resource>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        error!("Rejected {} body: {}", T::KIND, e);
        HermesError::InvalidData(T::KIND)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Dataset;

    #[test]
    fn malformed_body_is_invalid_data_for_that_kind() {
        assert_eq!(
            decode_body::<Dataset>("{\"id\": 7").err(),
            Some(HermesError::InvalidData("dataset"))
        );
        assert_eq!(
            decode_body::<Dataset>("{\"tags\": \"x\"}").err(),
            Some(HermesError::InvalidData("dataset"))
        );
    }

    #[test]
    fn partial_body_decodes_with_defaults() {
        let dataset: Dataset = decode_body("{\"id\": \"d1\"}").unwrap();
        assert_eq!(dataset.id, "d1");
        assert_eq!(dataset.provider, "");
    }
}
