//! Label model, label write schema and trait implementations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{require, Entity};
use crate::client::{segment, TrelloClient};
use crate::error::Result;
use crate::params::{to_params, Params};
use crate::traits::{Create, Delete, Fetch};
use crate::types::LabelColor;

/// A label defined on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// The label id.
    pub id: String,

    /// Label text. May be empty.
    pub name: String,

    /// Label color.
    pub color: LabelColor,

    /// Number of cards carrying the label.
    pub uses: u64,

    /// The board the label belongs to.
    #[serde(rename = "idBoard")]
    pub board_id: String,
}

impl Entity for Label {
    const KIND: &'static str = "Label";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Fields for a new label. Built only through [`LabelCreate::new`].
///
/// ```compile_fail
/// let create = trelloapi::LabelCreate {
///     name: String::new(),
///     color: trelloapi::LabelColor::Red,
///     board_id: String::new(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelCreate {
    name: String,

    color: LabelColor,

    #[serde(rename = "idBoard")]
    board_id: String,
}

impl LabelCreate {
    /// Build a label creation request.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` or `board_id` is empty.
    pub fn new(
        name: impl Into<String>,
        color: LabelColor,
        board_id: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let board_id = board_id.into();
        require("LabelCreate", "name", &name)?;
        require("LabelCreate", "board_id", &board_id)?;

        Ok(Self {
            name,
            color,
            board_id,
        })
    }

    /// Label text.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label color.
    pub fn color(&self) -> LabelColor {
        self.color
    }

    /// Board the label is created on.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Wire-name parameters.
    pub fn to_params(&self) -> Result<Params> {
        to_params("LabelCreate", self)
    }
}

#[async_trait]
impl Fetch for Label {
    /// Board id.
    type Parent = String;

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &TrelloClient, board_id: String) -> Result<Vec<Self>> {
        let path = format!("boards/{}/labels", segment(&board_id));
        let data = client.get(&path).await?;
        Self::from_json_array(data)
    }
}

#[async_trait]
impl Create for Label {
    type Params = LabelCreate;

    #[tracing::instrument(skip(client, params), fields(board_id = %params.board_id))]
    async fn create(client: &TrelloClient, params: &LabelCreate) -> Result<Self> {
        let data = client.post("labels", params.to_params()?).await?;
        Self::from_json(data)
    }
}

#[async_trait]
impl Delete for Label {
    #[tracing::instrument(skip(client))]
    async fn delete(client: &TrelloClient, id: String) -> Result<()> {
        let path = format!("labels/{}", segment(&id));
        client.delete(&path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrelloError;
    use serde_json::json;

    #[test]
    fn test_label_parses_color() {
        let label = Label::from_json(json!({
            "id": "lb1",
            "name": "Urgent",
            "color": "green_light",
            "uses": 4,
            "idBoard": "b1"
        }))
        .unwrap();

        assert_eq!(label.color, LabelColor::GreenLight);
        assert_eq!(label.uses, 4);
    }

    #[test]
    fn test_label_rejects_unknown_color() {
        let err = Label::from_json(json!({
            "id": "lb1",
            "name": "Urgent",
            "color": "magenta",
            "uses": 0,
            "idBoard": "b1"
        }))
        .unwrap_err();

        match err {
            TrelloError::Validation { entity, message } => {
                assert_eq!(entity, "Label");
                assert!(message.contains("magenta"), "message: {message}");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_label_rejects_negative_uses() {
        let err = Label::from_json(json!({
            "id": "lb1",
            "name": "",
            "color": "red",
            "uses": -1,
            "idBoard": "b1"
        }))
        .unwrap_err();
        assert!(matches!(err, TrelloError::Validation { entity: "Label", .. }));
    }

    #[test]
    fn test_label_create_params() {
        let params = LabelCreate::new("Bug", LabelColor::Red, "b1")
            .unwrap()
            .to_params()
            .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params["name"], "Bug");
        assert_eq!(params["color"], "red");
        assert_eq!(params["idBoard"], "b1");
    }

    #[test]
    fn test_label_create_requires_board() {
        assert!(LabelCreate::new("Bug", LabelColor::Red, "").is_err());
        assert!(LabelCreate::new("", LabelColor::Red, "b1").is_err());

        let create = LabelCreate::new("Bug", LabelColor::Pink, "b1").unwrap();
        assert_eq!(create.name(), "Bug");
        assert_eq!(create.color(), LabelColor::Pink);
        assert_eq!(create.board_id(), "b1");
    }
}
