pub mod crud_repo;

pub use crud_repo::InMemoryCrudRepository;
