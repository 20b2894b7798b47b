//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::TrelloClient;
use crate::error::Result;

/// Update an existing entity.
///
/// The update schema carries the target id along with the changed fields;
/// fields left unset are not sent.
///
/// # Example
///
/// ```ignore
/// use trelloapi::{TrelloClient, Card, CardUpdate, Update};
///
/// let update = CardUpdate::new("card-id")?.closed(true);
/// let card = Card::update(&client, &update).await?;
/// ```
#[async_trait]
pub trait Update: Sized {
    /// Parameters for the update.
    type Params: Sync;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(client: &TrelloClient, params: &Self::Params) -> Result<Self>;
}
