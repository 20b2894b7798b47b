//! Board model and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::Entity;
use crate::client::TrelloClient;
use crate::error::Result;
use crate::traits::Fetch;

/// A Trello board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// The board id.
    pub id: String,

    /// Board title.
    pub name: String,

    /// Board description (markdown).
    #[serde(rename = "desc")]
    pub description: String,

    /// Full URL of the board.
    pub url: String,

    /// Short URL of the board.
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}

impl Entity for Board {
    const KIND: &'static str = "Board";

    fn id(&self) -> &str {
        &self.id
    }
}

#[async_trait]
impl Fetch for Board {
    /// Boards are listed for the authenticated member.
    type Parent = ();

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &TrelloClient, _parent: ()) -> Result<Vec<Self>> {
        let data = client.get("members/me/boards").await?;
        Self::from_json_array(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrelloError;
    use serde_json::json;

    #[test]
    fn test_board_renames_wire_fields() {
        let board = Board::from_json(json!({
            "id": "b1",
            "name": "Roadmap",
            "desc": "Q3 plans",
            "url": "https://trello.com/b/abc/roadmap",
            "shortUrl": "https://trello.com/b/abc",
            "closed": false
        }))
        .unwrap();

        assert_eq!(board.description, "Q3 plans");
        assert_eq!(board.short_url, "https://trello.com/b/abc");
    }

    #[test]
    fn test_board_missing_field_names_it() {
        let err = Board::from_json(json!({
            "id": "b1",
            "name": "Roadmap",
            "url": "https://trello.com/b/abc/roadmap",
            "shortUrl": "https://trello.com/b/abc"
        }))
        .unwrap_err();

        match err {
            TrelloError::Validation { entity, message } => {
                assert_eq!(entity, "Board");
                assert!(message.contains("desc"), "message: {message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_board_rejects_empty_id() {
        let err = Board::from_json(json!({
            "id": "",
            "name": "x",
            "desc": "",
            "url": "u",
            "shortUrl": "s"
        }))
        .unwrap_err();
        assert!(matches!(err, TrelloError::Validation { entity: "Board", .. }));
    }
}
