//! OAuth URL construction and small helpers.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

use crate::error::{Result, TrelloError};
use crate::types::{LabelColor, OAuthCallbackMethod, OAuthExpiration, OAuthScope};

/// Trello's authorization page.
pub const OAUTH_AUTHORIZE_URL: &str = "https://trello.com/1/authorize";

/// Characters escaped in OAuth query values. `,`, `:` and `/` stay literal.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Inputs for [`generate_oauth_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthRequest {
    /// How the token is returned to `return_url`.
    pub callback_method: OAuthCallbackMethod,
    /// Where Trello redirects after the user decides.
    pub return_url: String,
    /// Requested scopes. Must not be empty.
    pub scopes: Vec<OAuthScope>,
    /// Token lifetime.
    pub expiration: OAuthExpiration,
    /// The application's API key.
    pub key: String,
}

/// Build the URL a user visits to grant this application a token.
///
/// Parameters are always emitted in the order `key`, `return_url`,
/// `callback_method`, `expiration`, `scope`, with scopes comma-joined.
///
/// ```
/// use trelloapi::{generate_oauth_url, OAuthRequest};
/// use trelloapi::{OAuthCallbackMethod, OAuthExpiration, OAuthScope};
///
/// let url = generate_oauth_url(&OAuthRequest {
///     callback_method: OAuthCallbackMethod::Fragment,
///     return_url: "https://x/y".to_string(),
///     scopes: vec![OAuthScope::Read, OAuthScope::Write],
///     expiration: OAuthExpiration::ThirtyDays,
///     key: "abc".to_string(),
/// })?;
/// assert_eq!(url.host_str(), Some("trello.com"));
/// # Ok::<(), trelloapi::TrelloError>(())
/// ```
///
/// # Errors
///
/// Returns a validation error if no scopes are requested.
pub fn generate_oauth_url(request: &OAuthRequest) -> Result<Url> {
    if request.scopes.is_empty() {
        return Err(TrelloError::validation(
            "OAuthRequest",
            "at least one scope is required",
        ));
    }

    let scope = request
        .scopes
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let pairs = [
        ("key", request.key.as_str()),
        ("return_url", request.return_url.as_str()),
        ("callback_method", request.callback_method.as_str()),
        ("expiration", request.expiration.as_str()),
        ("scope", scope.as_str()),
    ];
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{k}={}", utf8_percent_encode(v, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&");

    let mut url = Url::parse(OAUTH_AUTHORIZE_URL)?;
    url.set_query(Some(&query));

    Ok(url)
}

/// A uniformly random label color.
pub fn get_random_label_color() -> LabelColor {
    LabelColor::random()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> OAuthRequest {
        OAuthRequest {
            callback_method: OAuthCallbackMethod::Fragment,
            return_url: "https://x/y".to_string(),
            scopes: vec![OAuthScope::Read, OAuthScope::Write],
            expiration: OAuthExpiration::ThirtyDays,
            key: "abc".to_string(),
        }
    }

    #[test]
    fn test_oauth_url_has_every_pair() {
        let url = generate_oauth_url(&request()).unwrap();

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("trello.com"));
        assert_eq!(url.path(), "/1/authorize");
        assert_eq!(
            url.query(),
            Some("key=abc&return_url=https://x/y&callback_method=fragment&expiration=30days&scope=read,write")
        );

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("key".to_string(), "abc".to_string()),
                ("return_url".to_string(), "https://x/y".to_string()),
                ("callback_method".to_string(), "fragment".to_string()),
                ("expiration".to_string(), "30days".to_string()),
                ("scope".to_string(), "read,write".to_string()),
            ]
        );
    }

    #[test]
    fn test_oauth_url_is_deterministic() {
        let a = generate_oauth_url(&request()).unwrap();
        let b = generate_oauth_url(&request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_oauth_url_escapes_return_url() {
        let mut req = request();
        req.return_url = "https://x/y?a=1&b=2".to_string();
        let url = generate_oauth_url(&req).unwrap();

        let return_url = url
            .query_pairs()
            .find(|(k, _)| k == "return_url")
            .map(|(_, v)| v.into_owned());
        assert_eq!(return_url.as_deref(), Some("https://x/y?a=1&b=2"));
        assert!(url
            .query()
            .unwrap()
            .contains("return_url=https://x/y%3Fa%3D1%26b%3D2&"));
        assert_eq!(url.query_pairs().count(), 5);
    }

    #[test]
    fn test_oauth_url_requires_scope() {
        let mut req = request();
        req.scopes.clear();
        assert!(matches!(
            generate_oauth_url(&req),
            Err(TrelloError::Validation { .. })
        ));
    }

    #[test]
    fn test_random_label_color_is_declared() {
        for _ in 0..100 {
            assert!(LabelColor::ALL.contains(&get_random_label_color()));
        }
    }
}
