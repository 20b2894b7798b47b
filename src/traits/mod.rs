//! Trait definitions for Trello operations.
//!
//! Each entity type implements the traits its endpoints support, so the
//! endpoint path and parsing rules live next to the model they produce.

mod create;
mod delete;
mod fetch;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use fetch::Fetch;
pub use update::Update;
