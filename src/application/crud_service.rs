use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};
use crate::domain::{error::Result, ports::CrudRepository, resource::Resource};
use super::resource_service::{decode_body, ResourceService};

/// Validate, existence-check, write. Used as-is for campaigns and notifications and as
/// the storage half of the dataset service.
pub struct CrudService<T> {
    repo: Arc<dyn CrudRepository<T>>,
}

impl<T: Resource> CrudService<T> {
    pub fn new(repo: Arc<dyn CrudRepository<T>>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &dyn CrudRepository<T> {
        self.repo.as_ref()
    }

    /// Existence-check read. A failed read is logged and reported as the empty sentinel,
    /// so callers see it as "no such record".
    pub async fn fetch_current(&self, id: &str) -> T {
        match self.repo.get(id).await {
            Ok(record) => record,
            Err(e) => {
                warn!("Existence check for {} {} failed, treating as missing: {}", T::KIND, id, e);
                T::default()
            }
        }
    }
}

#[async_trait]
impl<T: Resource> ResourceService for CrudService<T> {
    type Record = T;

    async fn fetch(&self, id: &str) -> Result<T> {
        debug!("Fetching {} {}", T::KIND, id);
        self.repo.get(id).await
    }

    async fn fetch_all(&self) -> Result<Vec<T>> {
        debug!("Listing every {}", T::KIND);
        self.repo.list().await
    }

    async fn create(&self, body: &str) -> Result<T> {
        let record: T = decode_body(body)?;
        info!("Creating {} {}", T::KIND, record.id());
        self.repo.create(record).await
    }

    async fn update(&self, body: &str) -> Result<T> {
        let record: T = decode_body(body)?;
        let id = record.id().to_string();

        let current = self.fetch_current(&id).await;
        if current.is_empty_sentinel() {
            warn!("Refusing to update missing {} {}", T::KIND, id);
            return Err(T::missing_on_update());
        }

        info!("Updating {} {}", T::KIND, id);
        self.repo.update(&id, record).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let current = self.fetch_current(id).await;
        if current.is_empty_sentinel() {
            debug!("{} {} already absent, nothing to delete", T::KIND, id);
            return Ok(());
        }

        self.repo.delete(id).await?;
        info!("Deleted {} {}", T::KIND, id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::test_support::RecordingRepository,
        domain::{
            error::HermesError,
            models::{Agenda, Campaign, Notification},
        },
    };
    use serde_json::json;

    fn campaign(id: &str, name: &str) -> Campaign {
        Campaign {
            id: id.into(),
            name: name.into(),
            kind: "email".into(),
            filter: "country = 'PT'".into(),
            agenda: vec![Agenda {
                cron: "0 9 * * MON".into(),
                notification_id: "n1".into(),
                seq: 1,
            }],
            tags: vec!["spring".into()],
        }
    }

    fn crud_service<T: Resource>(repo: &Arc<RecordingRepository<T>>) -> CrudService<T> {
        CrudService::new(repo.clone())
    }

    #[tokio::test]
    async fn create_then_fetch_returns_the_input() {
        let repo = Arc::new(RecordingRepository::<Campaign>::new([]));
        let service = crud_service(&repo);
        let input = campaign("c1", "spring sale");

        let created = service
            .create(&serde_json::to_string(&input).unwrap())
            .await
            .unwrap();

        assert_eq!(created, input);
        assert_eq!(service.fetch("c1").await.unwrap(), input);
    }

    #[tokio::test]
    async fn update_replaces_the_whole_record() {
        let repo = Arc::new(RecordingRepository::new([campaign("c1", "spring sale")]));
        let service = crud_service(&repo);

        let updated = service
            .update(&json!({"id": "c1", "name": "summer sale"}).to_string())
            .await
            .unwrap();

        assert_eq!(updated.name, "summer sale");
        let stored = service.fetch("c1").await.unwrap();
        assert_eq!(stored.name, "summer sale");
        assert!(stored.agenda.is_empty());
    }

    #[tokio::test]
    async fn campaign_update_of_missing_record_reports_already_exists() {
        let repo = Arc::new(RecordingRepository::<Campaign>::new([]));
        let service = crud_service(&repo);

        let result = service
            .update(&json!({"id": "c9", "name": "ghost"}).to_string())
            .await;

        assert_eq!(result, Err(HermesError::AlreadyExists("Campaign")));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn notification_update_of_missing_record_reports_not_found() {
        let repo = Arc::new(RecordingRepository::<Notification>::new([]));
        let service = crud_service(&repo);

        let result = service
            .update(&json!({"id": "n9", "name": "ghost"}).to_string())
            .await;

        assert_eq!(result, Err(HermesError::NotFound("Notification")));
    }

    #[tokio::test]
    async fn failed_existence_check_counts_as_missing() {
        let mut repo = RecordingRepository::new([campaign("c1", "spring sale")]);
        repo.fail_get = true;
        let repo = Arc::new(repo);
        let service = crud_service(&repo);

        let result = service
            .update(&json!({"id": "c1", "name": "summer"}).to_string())
            .await;

        assert_eq!(result, Err(HermesError::AlreadyExists("Campaign")));
        assert_eq!(service.delete("c1").await, Ok(()));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected_before_storage() {
        let repo = Arc::new(RecordingRepository::<Notification>::new([]));
        let service = crud_service(&repo);

        assert_eq!(
            service.create("not json").await,
            Err(HermesError::InvalidData("notification"))
        );
        assert_eq!(
            service.update("42").await,
            Err(HermesError::InvalidData("notification"))
        );
        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = Arc::new(RecordingRepository::new([campaign("c1", "spring sale")]));
        let service = crud_service(&repo);

        assert_eq!(service.delete("c1").await, Ok(()));
        assert_eq!(service.delete("c1").await, Ok(()));
        assert_eq!(service.delete("never-existed").await, Ok(()));

        assert_eq!(repo.calls(), vec!["get", "delete", "get", "get"]);
        assert_eq!(service.fetch("c1").await.unwrap(), Campaign::default());
    }

    #[tokio::test]
    async fn delete_failure_is_surfaced() {
        let mut repo = RecordingRepository::new([campaign("c1", "spring sale")]);
        repo.fail_delete = true;
        let repo = Arc::new(repo);

        assert_eq!(crud_service(&repo).delete("c1").await, Err(HermesError::Delete));
    }

    #[tokio::test]
    async fn fetch_all_lists_every_record() {
        let repo = Arc::new(RecordingRepository::new([
            campaign("c1", "spring"),
            campaign("c2", "summer"),
        ]));

        let all = crud_service(&repo).fetch_all().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(repo.calls(), vec!["list"]);
    }
}
