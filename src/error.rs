//! Error types for Trello API operations.

use thiserror::Error;

/// Fixed message reported for HTTP 401 responses.
pub const INVALID_TOKEN_MESSAGE: &str =
    "Invalid token provided. Either the user has revoked it or it is incorrect.";

/// Errors that can occur during Trello API operations.
#[derive(Debug, Error)]
pub enum TrelloError {
    /// Configuration is missing or incomplete.
    #[error("Trello configuration required: {0}")]
    ConfigMissing(String),

    /// The HTTP session was used before `start()` or after `close()`.
    #[error("Session is not initialized")]
    SessionNotStarted,

    /// Input to a request schema, or a response body, has the wrong shape.
    #[error("Invalid {entity}: {message}")]
    Validation {
        entity: &'static str,
        message: String,
    },

    /// The API key/token pair was rejected (HTTP 401).
    #[error("{}", INVALID_TOKEN_MESSAGE)]
    InvalidToken,

    /// Any other non-2xx response.
    #[error("Trello API error: HTTP {status_code}")]
    Api { status_code: u16 },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl TrelloError {
    /// Build a validation error for the given entity or schema.
    pub fn validation(entity: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            entity,
            message: message.into(),
        }
    }

    /// HTTP status associated with a service error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidToken => Some(401),
            Self::Api { status_code } => Some(*status_code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Translate a non-2xx HTTP status code into a [`TrelloError`].
///
/// This is the only place raw status codes are interpreted.
pub fn error_for_status(status_code: u16) -> TrelloError {
    match status_code {
        401 => TrelloError::InvalidToken,
        _ => TrelloError::Api { status_code },
    }
}

/// Result type alias for Trello operations.
pub type Result<T> = core::result::Result<T, TrelloError>;
