pub mod error;
pub mod models;
pub mod ports;
pub mod resource;
pub mod validation;
