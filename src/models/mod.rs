//! Trello model types.
//!
//! Entities (`Board`, `List`, `Card`, `Label`) are read-only records parsed
//! from API responses. Write schemas (`CardCreate`, `CardUpdate`,
//! `LabelCreate`) live next to the entity they produce.

mod board;
mod card;
mod label;
mod list;

pub use board::*;
pub use card::*;
pub use label::*;
pub use list::*;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, TrelloError};

/// A record returned by the Trello API.
///
/// Parsing goes through serde with the per-field renames declared on each
/// model; any missing or mistyped field is reported as
/// [`TrelloError::Validation`] naming the entity.
pub trait Entity: DeserializeOwned {
    /// Entity name used in error messages.
    const KIND: &'static str;

    /// The Trello id of this record.
    fn id(&self) -> &str;

    /// Parse a single JSON object.
    fn from_json(value: Value) -> Result<Self> {
        let entity: Self = serde_path_to_error::deserialize(value).map_err(|e| {
            let path = e.path().to_string();
            let message = if path == "." {
                e.inner().to_string()
            } else {
                format!("field `{path}`: {}", e.inner())
            };
            TrelloError::validation(Self::KIND, message)
        })?;

        if entity.id().is_empty() {
            return Err(TrelloError::validation(Self::KIND, "field `id` must not be empty"));
        }

        Ok(entity)
    }

    /// Parse a JSON array, failing on the first element that does not parse.
    fn from_json_array(value: Value) -> Result<Vec<Self>> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(TrelloError::validation(
                    Self::KIND,
                    format!("expected a JSON array, got {}", json_type(&other)),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Self::from_json(item).map_err(|e| match e {
                    TrelloError::Validation { entity, message } => TrelloError::Validation {
                        entity,
                        message: format!("element {index}: {message}"),
                    },
                    other => other,
                })
            })
            .collect()
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reject empty required string fields on write schemas.
pub(crate) fn require(schema: &'static str, field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(TrelloError::validation(
            schema,
            format!("field `{field}` must not be empty"),
        ));
    }
    Ok(())
}
