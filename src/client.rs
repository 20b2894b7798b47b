//! Trello API client.
//!
//! Low-level HTTP client that handles the session lifecycle, authentication
//! and raw requests. Entity-specific operations are implemented via traits on
//! the model types; the `get_*`/`create_*`/`update_*`/`delete_*` methods here
//! are thin wrappers over those traits.

use std::env;
use std::ops::Deref;
use std::sync::Arc;

use reqwest::{Client, Method, Response};
use serde_json::Value;
use url::Url;

use crate::error::{error_for_status, Result, TrelloError};
use crate::models::{Board, Card, CardCreate, CardUpdate, Label, LabelCreate, List};
use crate::params::{encode_params, Params};
use crate::traits::{Create, Delete, Fetch, Update};

/// Default REST endpoint.
pub const DEFAULT_API_URL: &str = "https://api.trello.com/1/";
const USER_AGENT: &str = concat!("trelloapi/", env!("CARGO_PKG_VERSION"));

/// Trello API client.
///
/// The client owns at most one HTTP session. It starts out without one;
/// call [`start`](Self::start) or use [`enter`](Self::enter) before issuing
/// requests. Clones of a started client share the same connection pool.
///
/// # Example
///
/// ```no_run
/// use trelloapi::TrelloClient;
///
/// # async fn example() -> trelloapi::Result<()> {
/// let mut client = TrelloClient::from_env()?;
/// {
///     let api = client.enter()?;
///     for board in api.get_boards().await? {
///         println!("{} {}", board.id, board.name);
///     }
/// } // session closed here
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TrelloClient {
    session: Option<Client>,
    base_url: Arc<Url>,
    api_key: String,
    api_token: String,
}

impl std::fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url.as_str())
            .field("started", &self.is_started())
            .finish_non_exhaustive()
    }
}

impl TrelloClient {
    /// Create a client from environment variables.
    ///
    /// Uses `TRELLO_API_KEY` and `TRELLO_API_TOKEN` for authentication and
    /// optionally `TRELLO_API_URL` for the base URL (defaults to
    /// `https://api.trello.com/1/`).
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TRELLO_API_KEY").map_err(|_| {
            TrelloError::ConfigMissing("TRELLO_API_KEY environment variable not set".to_string())
        })?;
        let api_token = env::var("TRELLO_API_TOKEN").map_err(|_| {
            TrelloError::ConfigMissing(
                "TRELLO_API_TOKEN environment variable not set".to_string(),
            )
        })?;

        let base_url = env::var("TRELLO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::with_base_url(&api_key, &api_token, &base_url)
    }

    /// Create a client for the public Trello API.
    pub fn new(api_key: &str, api_token: &str) -> Result<Self> {
        Self::with_base_url(api_key, api_token, DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(api_key: &str, api_token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so relative joins keep the version prefix
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        Ok(Self {
            session: None,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
            api_token: api_token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Open the HTTP session. Does nothing if one is already open.
    pub fn start(&mut self) -> Result<()> {
        if self.session.is_some() {
            return Ok(());
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(TrelloError::HttpError)?;

        tracing::debug!(base_url = %self.base_url, "session started");
        self.session = Some(http);
        Ok(())
    }

    /// Close the HTTP session, returning the client to its initial state.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!(base_url = %self.base_url, "session closed");
        }
    }

    /// Whether a session is currently open.
    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    /// The open HTTP session.
    ///
    /// # Errors
    ///
    /// Returns [`TrelloError::SessionNotStarted`] if `start()` has not been
    /// called, or the session has since been closed.
    pub fn session(&self) -> Result<&Client> {
        self.session.as_ref().ok_or(TrelloError::SessionNotStarted)
    }

    /// Start the session if needed and hand back a guard that closes it when
    /// dropped.
    pub fn enter(&mut self) -> Result<SessionGuard<'_>> {
        self.start()?;
        Ok(SessionGuard { client: self })
    }

    /// Make a GET request.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.get_with_params(path, Params::new()).await
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params(&self, path: &str, params: Params) -> Result<Value> {
        let response = self.request(Method::GET, path, params).await?;
        Ok(response.json().await?)
    }

    /// Make a POST request; fields travel as query parameters.
    pub async fn post(&self, path: &str, params: Params) -> Result<Value> {
        let response = self.request(Method::POST, path, params).await?;
        Ok(response.json().await?)
    }

    /// Make a PUT request; fields travel as query parameters.
    pub async fn put(&self, path: &str, params: Params) -> Result<Value> {
        let response = self.request(Method::PUT, path, params).await?;
        Ok(response.json().await?)
    }

    /// Make a DELETE request. The response body is discarded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request(Method::DELETE, path, Params::new()).await?;
        Ok(())
    }

    /// Issue a request and check its status.
    #[tracing::instrument(skip(self, params))]
    async fn request(&self, method: Method, path: &str, mut params: Params) -> Result<Response> {
        let session = self.session()?;
        let url = self.base_url.join(path)?;

        // Credentials go in last so payload fields cannot shadow them.
        params.insert("key".to_string(), Value::String(self.api_key.clone()));
        params.insert("token".to_string(), Value::String(self.api_token.clone()));
        let query = encode_params(&params);

        tracing::debug!(params = query.len() - 2, "sending request");

        let response = session
            .request(method, url)
            .query(&query)
            .send()
            .await
            .map_err(TrelloError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "request failed");

        Err(error_for_status(status.as_u16()))
    }

    /// List the boards of the authenticated member.
    pub async fn get_boards(&self) -> Result<Vec<Board>> {
        Board::fetch(self, ()).await
    }

    /// List the lists on a board.
    pub async fn get_board_lists(&self, board_id: &str) -> Result<Vec<List>> {
        List::fetch(self, board_id.to_string()).await
    }

    /// List the labels defined on a board.
    pub async fn get_board_labels(&self, board_id: &str) -> Result<Vec<Label>> {
        Label::fetch(self, board_id.to_string()).await
    }

    /// List the cards in a list.
    pub async fn get_list_cards(&self, list_id: &str) -> Result<Vec<Card>> {
        Card::fetch(self, list_id.to_string()).await
    }

    /// Create a card.
    pub async fn create_card(&self, create: &CardCreate) -> Result<Card> {
        Card::create(self, create).await
    }

    /// Apply a partial update to the card named by `update.id()`.
    pub async fn update_card(&self, update: &CardUpdate) -> Result<Card> {
        Card::update(self, update).await
    }

    /// Delete a card.
    pub async fn delete_card(&self, card_id: &str) -> Result<()> {
        Card::delete(self, card_id.to_string()).await
    }

    /// Create a label on a board.
    pub async fn create_label(&self, create: &LabelCreate) -> Result<Label> {
        Label::create(self, create).await
    }

    /// Delete a label.
    pub async fn delete_label(&self, label_id: &str) -> Result<()> {
        Label::delete(self, label_id.to_string()).await
    }
}

/// Scoped session returned by [`TrelloClient::enter`].
///
/// Dereferences to the client. The session is closed when the guard goes out
/// of scope, whether by normal return, `?` or unwinding.
pub struct SessionGuard<'a> {
    client: &'a mut TrelloClient,
}

impl Deref for SessionGuard<'_> {
    type Target = TrelloClient;

    fn deref(&self) -> &TrelloClient {
        self.client
    }
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        self.client.close();
    }
}

/// Percent-encode an opaque id for use as a path segment.
pub(crate) fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let client = TrelloClient::new("test-key", "test-token").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("TrelloClient"));
        assert!(debug.contains("base_url"));
        // Credentials should not be in debug output
        assert!(!debug.contains("test-key"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = TrelloClient::with_base_url("k", "t", "https://api.trello.com/1").unwrap();
        let client2 = TrelloClient::with_base_url("k", "t", "https://api.trello.com/1/").unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
        assert_eq!(client1.base_url().as_str(), DEFAULT_API_URL);
    }

    #[test]
    fn test_session_before_start_fails() {
        let client = TrelloClient::new("k", "t").unwrap();
        assert!(matches!(client.session(), Err(TrelloError::SessionNotStarted)));
    }

    #[test]
    fn test_session_after_close_fails_again() {
        let mut client = TrelloClient::new("k", "t").unwrap();
        client.start().unwrap();
        assert!(client.session().is_ok());

        client.close();
        assert!(matches!(client.session(), Err(TrelloError::SessionNotStarted)));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut client = TrelloClient::new("k", "t").unwrap();
        client.start().unwrap();
        client.start().unwrap();
        assert!(client.is_started());
        client.close();
        client.close();
        assert!(!client.is_started());
    }

    #[test]
    fn test_guard_closes_on_drop() {
        let mut client = TrelloClient::new("k", "t").unwrap();
        {
            let guard = client.enter().unwrap();
            assert!(guard.session().is_ok());
        }
        assert!(!client.is_started());
    }

    #[test]
    fn test_guard_closes_on_early_return() {
        fn fails_inside(client: &mut TrelloClient) -> Result<()> {
            let api = client.enter()?;
            api.session()?;
            Err(TrelloError::validation("Card", "boom"))
        }

        let mut client = TrelloClient::new("k", "t").unwrap();
        assert!(fails_inside(&mut client).is_err());
        assert!(!client.is_started());
    }

    #[test]
    fn test_segment_encodes_reserved_characters() {
        assert_eq!(segment("abc123"), "abc123");
        assert_eq!(segment("a/b"), "a%2Fb");
    }
}
