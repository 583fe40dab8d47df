use aws_sdk_dynamodb::types::AttributeValue;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use thiserror::Error;

pub type Item = HashMap<String, AttributeValue>;

#[derive(Debug, Error)]
pub enum AttributeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("record must serialize to a JSON object")]
    NotAnObject,

    #[error("invalid number attribute: {0}")]
    Number(String),

    #[error("unsupported attribute: {0}")]
    Unsupported(String),
}

/// Converts a record into a DynamoDB item, one attribute per top-level field.
pub fn to_item<T: Serialize>(record: &T) -> Result<Item, AttributeError> {
    match serde_json::to_value(record)? {
        Value::Object(object) => Ok(object
            .into_iter()
            .map(|(key, value)| (key, to_attribute(value)))
            .collect()),
        _ => Err(AttributeError::NotAnObject),
    }
}

pub fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(items) => AttributeValue::L(items.into_iter().map(to_attribute).collect()),
        Value::Object(object) => AttributeValue::M(
            object
                .into_iter()
                .map(|(key, value)| (key, to_attribute(value)))
                .collect(),
        ),
    }
}

/// Decodes an item into a record. `NULL` attributes are treated as absent so that the
/// record's field defaults apply.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, AttributeError> {
    let object = to_object(item)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

fn to_object(item: Item) -> Result<Map<String, Value>, AttributeError> {
    let mut object = Map::with_capacity(item.len());
    for (key, attribute) in item {
        if matches!(attribute, AttributeValue::Null(_)) {
            continue;
        }
        object.insert(key, from_attribute(attribute)?);
    }
    Ok(object)
}

pub fn from_attribute(attribute: AttributeValue) -> Result<Value, AttributeError> {
    match attribute {
        AttributeValue::S(s) => Ok(Value::String(s)),
        AttributeValue::N(n) => parse_number(&n).map(Value::Number),
        AttributeValue::Bool(b) => Ok(Value::Bool(b)),
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::L(items) => items
            .into_iter()
            .map(from_attribute)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => to_object(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.into_iter().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(AttributeError::Unsupported(format!("{:?}", other))),
    }
}

fn parse_number(raw: &str) -> Result<Number, AttributeError> {
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(Number::from(i));
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Ok(Number::from(u));
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| AttributeError::Number(raw.to_string()))
}
