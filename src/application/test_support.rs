//! Recording fakes for the storage, secret and SQL ports.

use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};
use crate::{
    domain::{
        error::{HermesError, Result},
        ports::{CrudRepository, SecretStore, SqlConnection, SqlConnector},
        resource::Resource,
    },
    infrastructure::memory::InMemoryCrudRepository,
};

/// In-memory repository that records every call and can be told to fail reads or deletes.
pub struct RecordingRepository<T> {
    inner: InMemoryCrudRepository<T>,
    calls: Mutex<Vec<&'static str>>,
    pub fail_get: bool,
    pub fail_delete: bool,
}

impl<T: Resource> RecordingRepository<T> {
    pub fn new(records: impl IntoIterator<Item = T>) -> Self {
        Self {
            inner: InMemoryCrudRepository::with_records(records),
            calls: Mutex::new(Vec::new()),
            fail_get: false,
            fail_delete: false,
        }
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    pub fn writes(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(**call, "create" | "update" | "delete"))
            .count()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("poisoned mutex").push(call);
    }
}

#[async_trait]
impl<T: Resource> CrudRepository<T> for RecordingRepository<T> {
    async fn list(&self) -> Result<Vec<T>> {
        self.record("list");
        self.inner.list().await
    }

    async fn get(&self, id: &str) -> Result<T> {
        self.record("get");
        if self.fail_get {
            return Err(HermesError::Fetch);
        }
        self.inner.get(id).await
    }

    async fn create(&self, record: T) -> Result<T> {
        self.record("create");
        self.inner.create(record).await
    }

    async fn update(&self, id: &str, record: T) -> Result<T> {
        self.record("update");
        self.inner.update(id, record).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record("delete");
        if self.fail_delete {
            return Err(HermesError::Delete);
        }
        self.inner.delete(id).await
    }
}

#[derive(Default)]
pub struct RecordingSecretStore {
    secrets: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<String>>,
    pub fail_put: bool,
    pub fail_get: bool,
    pub fail_delete: bool,
}

impl RecordingSecretStore {
    pub fn with_secret(name: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .secrets
            .lock()
            .expect("poisoned mutex")
            .insert(name.to_string(), value.to_string());
        store
    }

    pub fn secret(&self, name: &str) -> Option<String> {
        self.secrets.lock().expect("poisoned mutex").get(name).cloned()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("poisoned mutex").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("poisoned mutex").push(call);
    }
}

#[async_trait]
impl SecretStore for RecordingSecretStore {
    async fn put_secret(&self, name: &str, value: &str, overwrite: bool) -> Result<()> {
        self.record(format!("put:{name}:{overwrite}"));
        if self.fail_put {
            return Err(HermesError::SecretStore);
        }
        let mut secrets = self.secrets.lock().expect("poisoned mutex");
        if !overwrite && secrets.contains_key(name) {
            return Err(HermesError::SecretStore);
        }
        secrets.insert(name.to_string(), value.to_string());
        Ok(())
    }

    async fn get_secret(&self, name: &str) -> Result<String> {
        self.record(format!("get:{name}"));
        if self.fail_get {
            return Err(HermesError::SecretRetrieval);
        }
        self.secret(name).ok_or(HermesError::SecretRetrieval)
    }

    async fn delete_secret(&self, name: &str) -> Result<()> {
        self.record(format!("delete:{name}"));
        if self.fail_delete {
            return Err(HermesError::SecretStore);
        }
        self.secrets.lock().expect("poisoned mutex").remove(name);
        Ok(())
    }
}

/// How a [`FakeConnector`] behaves for every DSN it is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    BadDsn,
    PingFails,
}

pub struct FakeConnector {
    outcome: ProbeOutcome,
    opened: Mutex<Vec<String>>,
    closes: Arc<AtomicUsize>,
}

impl FakeConnector {
    pub fn new(outcome: ProbeOutcome) -> Self {
        Self {
            outcome,
            opened: Mutex::new(Vec::new()),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().expect("poisoned mutex").clone()
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SqlConnector for FakeConnector {
    async fn open(&self, credentials: &str) -> Result<Box<dyn SqlConnection>> {
        self.opened
            .lock()
            .expect("poisoned mutex")
            .push(credentials.to_string());
        if self.outcome == ProbeOutcome::BadDsn {
            return Err(HermesError::InvalidCredentials);
        }
        Ok(Box::new(FakeConnection {
            reachable: self.outcome == ProbeOutcome::Reachable,
            closes: Arc::clone(&self.closes),
        }))
    }
}

struct FakeConnection {
    reachable: bool,
    closes: Arc<AtomicUsize>,
}

#[async_trait]
impl SqlConnection for FakeConnection {
    async fn ping(&mut self) -> Result<()> {
        if self.reachable {
            Ok(())
        } else {
            Err(HermesError::Unreachable)
        }
    }

    async fn close(self: Box<Self>) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
