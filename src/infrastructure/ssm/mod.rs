pub mod secret_store;

pub use secret_store::SsmSecretStore;
