//! Trello API client library.
//!
//! A typed Rust client for the Trello REST API. Responses are parsed into
//! validated models with Rust field names; write requests are built from
//! schemas that send only the fields you set.
//!
//! # Quick Start
//!
//! ```no_run
//! use trelloapi::{CardCreate, CardUpdate, Position, TrelloClient};
//!
//! #[tokio::main]
//! async fn main() -> trelloapi::Result<()> {
//!     // Create client from environment variables
//!     let mut client = TrelloClient::from_env()?;
//!     let api = client.enter()?;
//!
//!     let boards = api.get_boards().await?;
//!     let board = &boards[0];
//!     let lists = api.get_board_lists(&board.id).await?;
//!
//!     // Create a card at the top of the first list
//!     let create = CardCreate::new("Write release notes", &lists[0].id)?
//!         .position(Position::TOP);
//!     let card = api.create_card(&create).await?;
//!
//!     // Archive it again
//!     let update = CardUpdate::new(&card.id)?.closed(true);
//!     api.update_card(&update).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Operations are traits implemented by the entity types that support them:
//!
//! - [`Fetch`] - List every entity under a parent (board, list, member)
//! - [`Create`] - Create an entity from a write schema
//! - [`Update`] - Apply a partial update
//! - [`Delete`] - Remove an entity by id
//!
//! [`TrelloClient`] also exposes each operation as a method
//! (`get_boards`, `create_card`, ...).
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `TRELLO_API_KEY` (required) - Your Trello API key
//! - `TRELLO_API_TOKEN` (required) - A member token for that key
//! - `TRELLO_API_URL` (optional) - Base URL (defaults to `https://api.trello.com/1/`)

pub mod cli;
mod client;
mod error;
mod models;
mod output;
mod params;
mod traits;
mod types;
mod utils;

// Re-export core types
pub use client::{SessionGuard, TrelloClient, DEFAULT_API_URL};
pub use error::{error_for_status, Result, TrelloError, INVALID_TOKEN_MESSAGE};
pub use params::{encode_params, Params};

// Re-export traits
pub use traits::{Create, Delete, Fetch, Update};

// Re-export models
pub use models::{
    // Entities
    Board,
    Card,
    Entity,
    Label,
    List,
    // Write schemas
    CardCreate,
    CardUpdate,
    LabelCreate,
    Position,
};

// Re-export value sets
pub use types::{CardPos, LabelColor, OAuthCallbackMethod, OAuthExpiration, OAuthScope};

// Re-export helpers
pub use output::PrettyPrint;
pub use utils::{generate_oauth_url, get_random_label_color, OAuthRequest, OAUTH_AUTHORIZE_URL};
