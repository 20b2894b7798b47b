//! Fetch trait for listing the children of a parent resource.

use async_trait::async_trait;

use crate::client::TrelloClient;
use crate::error::Result;

/// List every entity under a parent resource.
///
/// Trello returns whole collections in one response, so there is no paging.
/// Each element is validated on its own and one bad element fails the call.
///
/// # Example
///
/// ```ignore
/// use trelloapi::{TrelloClient, Card, Fetch};
///
/// let cards = Card::fetch(&client, "5f1a...".to_string()).await?;
/// ```
#[async_trait]
pub trait Fetch: Sized + Send {
    /// Identifier of the parent (e.g. a board id), or `()` for top-level
    /// collections.
    type Parent: Send;

    /// Fetch all entities under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or any element does not parse.
    async fn fetch(client: &TrelloClient, parent: Self::Parent) -> Result<Vec<Self>>;
}
