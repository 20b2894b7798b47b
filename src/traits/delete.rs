//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::TrelloClient;
use crate::error::Result;

/// Delete an entity by id.
#[async_trait]
pub trait Delete {
    /// Delete the entity. Nothing is returned on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn delete(client: &TrelloClient, id: String) -> Result<()>;
}
