//! Query parameter encoding.
//!
//! Trello takes every write field as a query parameter. Request schemas are
//! serialized to a JSON object first (applying their field renames and
//! dropping unset fields), then flattened here into string pairs.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, TrelloError};

/// A parameter map keyed by wire names.
pub type Params = Map<String, Value>;

/// Serialize a request schema into its wire-name parameter map.
///
/// `entity` names the schema in the error if serialization does not produce a
/// JSON object.
pub fn to_params<T: Serialize + ?Sized>(entity: &'static str, value: &T) -> Result<Params> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(TrelloError::validation(
            entity,
            format!("expected an object of fields, got {other}"),
        )),
    }
}

/// Flatten a parameter map into query pairs.
///
/// Booleans become `"true"`/`"false"`, arrays are comma-joined (an empty array
/// becomes an empty string) and nulls are dropped.
pub fn encode_params(params: &Params) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| encode_value(value).map(|v| (key.clone(), v)))
        .collect()
}

fn encode_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(encode_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}
