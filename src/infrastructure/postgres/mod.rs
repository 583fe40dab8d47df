pub mod connector;

pub use connector::PostgresConnector;
