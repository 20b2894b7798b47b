//! Create trait for new entities.

use async_trait::async_trait;

use crate::client::TrelloClient;
use crate::error::Result;

/// Create a new entity from a write schema.
///
/// # Example
///
/// ```ignore
/// use trelloapi::{TrelloClient, Card, CardCreate, Create};
///
/// let create = CardCreate::new("Write docs", "list-id")?.description("README first");
/// let card = Card::create(&client, &create).await?;
/// ```
#[async_trait]
pub trait Create: Sized {
    /// The write schema describing the new entity.
    type Params: Sync;

    /// Create the entity and return it as stored by Trello.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not parse.
    async fn create(client: &TrelloClient, params: &Self::Params) -> Result<Self>;
}
