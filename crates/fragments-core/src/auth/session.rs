//! The resolved authenticated caller.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::tokens::{AccessToken, IdToken};

/// Header carrying the bearer credential.
pub const AUTHORIZATION: &str = "Authorization";

/// Header declaring the request body's media type.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Content type declared when the caller does not choose one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Request headers derived from a [`Session`].
///
/// Always exactly two entries: [`AUTHORIZATION`] and [`CONTENT_TYPE`].
pub type AuthorizationHeaders = BTreeMap<&'static str, String>;

/// An authenticated caller.
///
/// A `Session` is immutable: signing in again yields a new value rather
/// than changing an existing one. It is cheap to clone (internal `Arc`) and
/// can be read by any number of concurrent client calls.
///
/// # Example
///
/// ```
/// use fragments_core::{AccessToken, IdToken, Session};
///
/// let session = Session::new("alice", IdToken::new("abc123"), AccessToken::new("xyz"));
/// let headers = session.authorization_headers("text/plain");
/// assert_eq!(headers["Authorization"], "Bearer abc123");
/// assert_eq!(headers["Content-Type"], "text/plain");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(PartialEq, Eq)]
struct SessionInner {
    username: String,
    id_token: IdToken,
    access_token: AccessToken,
}

impl Session {
    /// Create a session from the identity integration's state.
    pub fn new(username: impl Into<String>, id_token: IdToken, access_token: AccessToken) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                username: username.into(),
                id_token,
                access_token,
            }),
        }
    }

    /// Returns the display name of the signed-in identity.
    pub fn username(&self) -> &str {
        &self.inner.username
    }

    /// Returns the identity token used as the bearer credential.
    pub fn id_token(&self) -> &IdToken {
        &self.inner.id_token
    }

    /// Returns the access token. Not attached to fragment requests.
    pub fn access_token(&self) -> &AccessToken {
        &self.inner.access_token
    }

    /// Returns the `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.inner.id_token.as_str())
    }

    /// Headers authorizing a request whose body has the given content type.
    pub fn authorization_headers(&self, content_type: &str) -> AuthorizationHeaders {
        BTreeMap::from([
            (AUTHORIZATION, self.bearer()),
            (CONTENT_TYPE, content_type.to_string()),
        ])
    }

    /// Headers declaring [`DEFAULT_CONTENT_TYPE`].
    pub fn default_headers(&self) -> AuthorizationHeaders {
        self.authorization_headers(DEFAULT_CONTENT_TYPE)
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.inner.username)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}
