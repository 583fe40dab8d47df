use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Agenda {
    pub cron: String,
    pub notification_id: String,
    pub seq: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub filter: String,
    pub agenda: Vec<Agenda>,
    pub tags: Vec<String>,
}

/// A SQL data source. With the `ssm` provider the persisted `credentials` is the name of
/// the SecureString parameter holding the DSN, which is always the dataset id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    pub credentials: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
    pub tags: Vec<String>,
}

/// Body of a connection test. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub credentials: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub provider: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    #[serde(rename = "in")]
    pub input: String,
    pub op: String,
    pub val: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Template {
    pub rules: Vec<Rule>,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Query {
    pub dataset_id: String,
    pub query: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: String,
    pub name: String,
    pub templates: Vec<Template>,
    pub query: Query,
    pub inputs: Vec<String>,
    pub tags: Vec<String>,
}
