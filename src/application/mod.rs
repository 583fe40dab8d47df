pub mod connection_service;
pub mod crud_service;
pub mod dataset_service;
pub mod resource_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection_service::ConnectionService;
pub use crud_service::CrudService;
pub use dataset_service::DatasetService;
pub use resource_service::ResourceService;
