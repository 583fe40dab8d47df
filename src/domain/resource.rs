use serde::{de::DeserializeOwned, Serialize};
use crate::domain::{
    error::HermesError,
    models::{Campaign, Dataset, Notification},
};

/// Per-record-type metadata used by the generic CRUD protocol.
pub trait Resource:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    /// Lowercase noun used in "invalid ... data" messages.
    const KIND: &'static str;
    /// Capitalised noun used in existence-check messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;

    /// A row that does not exist decodes to the default record; `name` is required, so an
    /// empty one marks the sentinel.
    fn is_empty_sentinel(&self) -> bool {
        self.name().is_empty()
    }

    /// Error raised when an update targets a record that does not exist.
    fn missing_on_update() -> HermesError {
        HermesError::NotFound(Self::LABEL)
    }
}

impl Resource for Campaign {
    const KIND: &'static str = "campaign";
    const LABEL: &'static str = "Campaign";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    // Campaign updates have always reported a missing record as "already exists".
    fn missing_on_update() -> HermesError {
        HermesError::AlreadyExists(Self::LABEL)
    }
}

impl Resource for Dataset {
    const KIND: &'static str = "dataset";
    const LABEL: &'static str = "Dataset";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Resource for Notification {
    const KIND: &'static str = "notification";
    const LABEL: &'static str = "Notification";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
