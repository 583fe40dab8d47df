pub mod dynamodb;
pub mod memory;
pub mod postgres;
pub mod ssm;
