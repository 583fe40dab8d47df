use crate::domain::error::{HermesError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Credentials are stored in SSM Parameter Store; the record keeps a reference.
    Ssm,
    Direct,
}

impl Provider {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ssm" => Some(Self::Ssm),
            "direct" => Some(Self::Direct),
            _ => None,
        }
    }

    pub fn requires_secret_store(self) -> bool {
        matches!(self, Self::Ssm)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetType {
    Sql,
}

impl DatasetType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sql" => Some(Self::Sql),
            _ => None,
        }
    }
}

pub fn validate_provider(value: &str) -> Result<Provider> {
    Provider::parse(value).ok_or(HermesError::InvalidProvider)
}

pub fn validate_type(value: &str) -> Result<DatasetType> {
    DatasetType::parse(value).ok_or(HermesError::InvalidType)
}

/// True when `provider` names the secret-store provider. Unknown values are not.
pub fn uses_secret_store(provider: &str) -> bool {
    Provider::parse(provider).is_some_and(Provider::requires_secret_store)
}
