//! Card model, card write schemas and trait implementations.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{require, Entity};
use crate::client::{segment, TrelloClient};
use crate::error::{Result, TrelloError};
use crate::params::{to_params, Params};
use crate::traits::{Create, Delete, Fetch, Update};
use crate::types::CardPos;

/// A Trello card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// The card id.
    pub id: String,

    /// Card title.
    pub name: String,

    /// Card description (markdown).
    #[serde(rename = "desc")]
    pub description: String,

    /// Short URL of the card.
    #[serde(rename = "shortUrl")]
    pub short_url: String,

    /// Full URL of the card.
    pub url: String,

    /// Whether the card is archived.
    pub closed: bool,

    /// Sort rank within the list.
    #[serde(rename = "pos")]
    pub position: f64,

    /// The list holding the card.
    #[serde(rename = "idList")]
    pub list_id: String,

    /// The board holding the card.
    #[serde(rename = "idBoard")]
    pub board_id: String,

    /// Whether the due date is marked complete.
    #[serde(rename = "dueComplete")]
    pub completed: bool,

    /// Ids of the labels attached to the card, in Trello's order.
    #[serde(rename = "labels", deserialize_with = "label_ids")]
    pub label_ids: Vec<String>,
}

/// Cards carry either bare label ids or full label objects under `labels`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelRef {
    Id(String),
    Object { id: String },
}

fn label_ids<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Vec<String>, D::Error> {
    let refs = Vec::<LabelRef>::deserialize(deserializer)?;
    Ok(refs
        .into_iter()
        .map(|r| match r {
            LabelRef::Id(id) | LabelRef::Object { id } => id,
        })
        .collect())
}

impl Card {
    /// Whether the card carries the given label.
    pub fn has_label(&self, label_id: &str) -> bool {
        self.label_ids.iter().any(|id| id == label_id)
    }
}

impl Entity for Card {
    const KIND: &'static str = "Card";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Where to place a card within its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// A named directive (`top` or `bottom`).
    Directive(CardPos),
    /// An explicit positive rank.
    Rank(NonZeroU64),
}

impl Position {
    /// Place the card first in its list.
    pub const TOP: Self = Self::Directive(CardPos::Top);
    /// Place the card last in its list.
    pub const BOTTOM: Self = Self::Directive(CardPos::Bottom);

    /// An explicit rank. Zero is rejected.
    pub fn rank(rank: u64) -> Result<Self> {
        NonZeroU64::new(rank)
            .map(Self::Rank)
            .ok_or_else(|| TrelloError::validation("Position", "rank must be a positive integer"))
    }
}

impl From<CardPos> for Position {
    fn from(pos: CardPos) -> Self {
        Self::Directive(pos)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directive(pos) => fmt::Display::fmt(pos, f),
            Self::Rank(rank) => fmt::Display::fmt(rank, f),
        }
    }
}

impl FromStr for Position {
    type Err = TrelloError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(pos) = s.parse::<CardPos>() {
            return Ok(pos.into());
        }
        let digits = !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        match s.parse::<u64>() {
            Ok(rank) if digits => Self::rank(rank),
            _ => Err(TrelloError::validation(
                "Position",
                format!("'{s}' is neither top, bottom nor a positive integer"),
            )),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        match self {
            Self::Directive(pos) => pos.serialize(serializer),
            Self::Rank(rank) => serializer.serialize_u64(rank.get()),
        }
    }
}

/// Fields for a new card.
///
/// `name` and `list_id` are required; everything else is sent only when set.
///
/// ```
/// use trelloapi::{CardCreate, Position};
///
/// let create = CardCreate::new("Ship it", "list-1")?
///     .position(Position::TOP)
///     .closed(false);
/// let params = create.to_params()?;
/// assert_eq!(params["idList"], "list-1");
/// assert_eq!(params["closed"], false);
/// assert!(params.get("desc").is_none());
/// # Ok::<(), trelloapi::TrelloError>(())
/// ```
///
/// The required fields are private, so [`CardCreate::new`] is the only way
/// to build one:
///
/// ```compile_fail
/// let create = trelloapi::CardCreate {
///     name: String::new(),
///     list_id: String::new(),
///     description: None,
///     position: None,
///     closed: None,
///     completed: None,
///     label_ids: None,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardCreate {
    name: String,

    #[serde(rename = "idList")]
    list_id: String,

    /// Card description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Placement within the list.
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Create the card archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// Mark the due date complete.
    #[serde(rename = "dueComplete", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    /// Labels to attach.
    #[serde(rename = "idLabels", skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
}

impl CardCreate {
    /// Start a new card with its required fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `name` or `list_id` is empty.
    pub fn new(name: impl Into<String>, list_id: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let list_id = list_id.into();
        require("CardCreate", "name", &name)?;
        require("CardCreate", "list_id", &list_id)?;

        Ok(Self {
            name,
            list_id,
            description: None,
            position: None,
            closed: None,
            completed: None,
            label_ids: None,
        })
    }

    /// Card title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// List the card is created in.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the placement.
    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the archived flag.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = Some(closed);
        self
    }

    /// Set the due-complete flag.
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Set the attached labels.
    #[must_use]
    pub fn label_ids<I, S>(mut self, label_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_ids = Some(label_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Wire-name parameters for the fields that are set.
    pub fn to_params(&self) -> Result<Params> {
        to_params("CardCreate", self)
    }
}

/// A partial update to an existing card.
///
/// Only `id` is required. Unset fields are left untouched on the server;
/// `closed(false)` is sent as `closed=false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardUpdate {
    /// Sent in the path, never as a parameter.
    #[serde(skip)]
    id: String,

    /// New title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New description.
    #[serde(rename = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New placement.
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Archive or unarchive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,

    /// Mark the due date complete or not.
    #[serde(rename = "dueComplete", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,

    /// Replace the attached labels.
    #[serde(rename = "idLabels", skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,

    /// Move the card to another list.
    #[serde(rename = "idList", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

impl CardUpdate {
    /// Start an update for the given card.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `id` is empty.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        require("CardUpdate", "id", &id)?;

        Ok(Self {
            id,
            name: None,
            description: None,
            position: None,
            closed: None,
            completed: None,
            label_ids: None,
            list_id: None,
        })
    }

    /// The card being updated.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Set the title.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the placement.
    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Set the archived flag.
    #[must_use]
    pub fn closed(mut self, closed: bool) -> Self {
        self.closed = Some(closed);
        self
    }

    /// Set the due-complete flag.
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Replace the attached labels. An empty list clears them.
    #[must_use]
    pub fn label_ids<I, S>(mut self, label_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.label_ids = Some(label_ids.into_iter().map(Into::into).collect());
        self
    }

    /// Move the card to another list.
    #[must_use]
    pub fn list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = Some(list_id.into());
        self
    }

    /// Wire-name parameters for the fields that are set.
    pub fn to_params(&self) -> Result<Params> {
        to_params("CardUpdate", self)
    }
}

#[async_trait]
impl Fetch for Card {
    /// List id.
    type Parent = String;

    #[tracing::instrument(skip(client))]
    async fn fetch(client: &TrelloClient, list_id: String) -> Result<Vec<Self>> {
        let path = format!("lists/{}/cards", segment(&list_id));
        let data = client.get(&path).await?;
        Self::from_json_array(data)
    }
}

#[async_trait]
impl Create for Card {
    type Params = CardCreate;

    #[tracing::instrument(skip(client, params), fields(list_id = %params.list_id))]
    async fn create(client: &TrelloClient, params: &CardCreate) -> Result<Self> {
        let data = client.post("cards", params.to_params()?).await?;
        Self::from_json(data)
    }
}

#[async_trait]
impl Update for Card {
    type Params = CardUpdate;

    #[tracing::instrument(skip(client, params), fields(card_id = %params.id))]
    async fn update(client: &TrelloClient, params: &CardUpdate) -> Result<Self> {
        let path = format!("cards/{}", segment(&params.id));
        let data = client.put(&path, params.to_params()?).await?;
        Self::from_json(data)
    }
}

#[async_trait]
impl Delete for Card {
    #[tracing::instrument(skip(client))]
    async fn delete(client: &TrelloClient, id: String) -> Result<()> {
        let path = format!("cards/{}", segment(&id));
        client.delete(&path).await
    }
}
