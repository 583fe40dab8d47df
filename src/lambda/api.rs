use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::error;
use crate::domain::error::HermesError;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_METHOD_NOT_ALLOWED: u16 = 405;

pub const METHOD_NOT_ALLOWED: &str = "method Not allowed";

/// API Gateway REST proxy event. Only the fields the handlers read are modelled; API
/// Gateway sends `null` for absent maps and bodies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayProxyRequest {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiGatewayProxyRequest {
    pub fn new(http_method: &str) -> Self {
        Self {
            http_method: http_method.to_string(),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_path_parameter(mut self, key: &str, value: &str) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_query_parameter(mut self, key: &str, value: &str) -> Self {
        self.query_string_parameters
            .get_or_insert_with(HashMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Path parameter, or the empty string when absent.
    pub fn path_parameter(&self, key: &str) -> &str {
        lookup(&self.path_parameters, key)
    }

    /// Query string parameter, or the empty string when absent.
    pub fn query_parameter(&self, key: &str) -> &str {
        lookup(&self.query_string_parameters, key)
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

fn lookup<'a>(parameters: &'a Option<HashMap<String, String>>, key: &str) -> &'a str {
    parameters
        .as_ref()
        .and_then(|values| values.get(key))
        .map(String::as_str)
        .unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn api_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    let body = serde_json::to_string(payload).unwrap_or_else(|e| {
        error!("Failed to serialize response body: {}", e);
        Value::Null.to_string()
    });

    ApiGatewayResponse {
        status_code,
        headers: HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
        body,
    }
}

pub fn error_response(error: &HermesError) -> ApiGatewayResponse {
    api_response(
        STATUS_BAD_REQUEST,
        &ErrorBody {
            error: error.to_string(),
        },
    )
}

pub fn empty_response() -> ApiGatewayResponse {
    api_response(STATUS_OK, &Value::Null)
}

pub fn unhandled_method() -> ApiGatewayResponse {
    api_response(STATUS_METHOD_NOT_ALLOWED, &METHOD_NOT_ALLOWED)
}
