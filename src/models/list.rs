//! List model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::client::{segment, TrelloClient};
use crate::error::Result;
use crate::traits::Fetch;

/// A list (column) on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// The list id.
    pub id: String,

    /// List title.
    pub name: String,

    /// Whether the list is archived.
    pub closed: bool,

    /// Sort rank among the lists of the same board.
    #[serde(rename = "pos")]
    pub position: f64,

    /// The board this list belongs to.
    #[serde(rename = "idBoard")]
    pub board_id: String,
}

impl Entity for List {
    const KIND: &'static str = "List";

    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait]
impl Fetch for List {
    /// Board id.
    type Parent = String;

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &TrelloClient, board_id: String) -> Result<Vec<Self>> {
        let path = format!("boards/{}/lists", segment(&board_id));
        let data = client.get(&path).await?;
        Self::from_json_array(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrelloError;
    use serde_json::json;

    #[test]
    fn test_list_parses_integer_position() {
        let list = List::from_json(json!({
            "id": "l1",
            "name": "Doing",
            "closed": false,
            "pos": 16384,
            "idBoard": "b1"
        }))
        .unwrap();

        assert_eq!(list.position, 16384.0);
        assert_eq!(list.board_id, "b1");
    }

    #[test]
    fn test_list_rejects_string_closed() {
        let err = List::from_json(json!({
            "id": "l1",
            "name": "Doing",
            "closed": "false",
            "pos": 1.5,
            "idBoard": "b1"
        }))
        .unwrap_err();

        match err {
            TrelloError::Validation { entity, message } => {
                assert_eq!(entity, "List");
                assert!(message.starts_with("field `closed`"), "message: {message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_lists_sort_by_position() {
        let mut lists = List::from_json_array(json!([
            { "id": "c", "name": "Done", "closed": false, "pos": 3.0, "idBoard": "b" },
            { "id": "a", "name": "Todo", "closed": false, "pos": 1.0, "idBoard": "b" },
            { "id": "b", "name": "Doing", "closed": false, "pos": 2.5, "idBoard": "b" }
        ]))
        .unwrap();

        lists.sort_by(|x, y| x.position.total_cmp(&y.position));
        let ids: Vec<&str> = lists.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_array_fails_on_any_bad_element() {
        let err = List::from_json_array(json!([
            { "id": "a", "name": "Todo", "closed": false, "pos": 1.0, "idBoard": "b" },
            { "id": "b", "name": "Doing", "closed": false, "pos": 2.0 }
        ]))
        .unwrap_err();

        match err {
            TrelloError::Validation { message, .. } => {
                assert!(message.starts_with("element 1"), "message: {message}");
                assert!(message.contains("idBoard"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_array_rejects_object_body() {
        let err = List::from_json_array(json!({ "id": "a" })).unwrap_err();
        assert!(matches!(err, TrelloError::Validation { entity: "List", .. }));
    }
}
