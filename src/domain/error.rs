use thiserror::Error;

pub type Result<T> = std::result::Result<T, HermesError>;

/// Failures surfaced to API clients. The display string is the message placed in the
/// `{"error": ...}` response body; underlying causes are logged where they happen.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HermesError {
    #[error("invalid {0} data")]
    InvalidData(&'static str),

    #[error("invalid connection data")]
    InvalidConnectionData,

    #[error("invalid provider")]
    InvalidProvider,

    #[error("invalid type. Only SQL is supported")]
    InvalidType,

    #[error("{0} does not exist")]
    NotFound(&'static str),

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("could not store your credentials securely in SSM")]
    SecretStore,

    #[error("could not retrieve securely credentials from SSM")]
    SecretRetrieval,

    #[error("could not marshal item")]
    Encode,

    #[error("failed to unmarshal record")]
    Decode,

    #[error("could not dynamo put item error")]
    Write,

    #[error("could not delete item")]
    Delete,

    #[error("failed to fetch record")]
    Fetch,

    #[error("invalid connection credentials")]
    InvalidCredentials,

    #[error("unable to ping connect. check credentials and access")]
    Unreachable,

    #[error("configuration error: {0}")]
    Config(String),
}
