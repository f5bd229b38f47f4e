//! API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Versioned collection path under the base URL.
const FRAGMENTS_PATH: [&str; 2] = ["v1", "fragments"];

/// A validated base URL of a fragments service.
///
/// The URL must be absolute, use `http` or `https`, and have a host. A base
/// path (for deployments behind a path prefix) is preserved.
///
/// # Example
///
/// ```
/// use fragments_core::ApiUrl;
///
/// let api = ApiUrl::new("http://localhost:8080/").unwrap();
/// assert_eq!(api.fragments_url(&[]).as_str(), "http://localhost:8080/v1/fragments");
/// assert_eq!(
///     api.fragments_url(&["abc", "info"]).as_str(),
///     "http://localhost:8080/v1/fragments/abc/info"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut normalized = url;
        normalized.set_query(None);
        normalized.set_fragment(None);
        let trimmed = normalized.path().trim_end_matches('/').to_string();
        normalized.set_path(&trimmed);

        Ok(Self(normalized))
    }

    /// Returns the URL of `/v1/fragments` followed by the given path segments.
    ///
    /// Segments are percent-encoded individually, so an id can never escape
    /// its path position.
    pub fn fragments_url(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        // Validation rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(FRAGMENTS_PATH);
            path.extend(segments);
        }
        url
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns true if the service is reached over TLS.
    pub fn is_secure(&self) -> bool {
        self.0.scheme() == "https"
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        if scheme != "https" && scheme != "http" {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: format!("unsupported scheme '{}' (expected http or https)", scheme),
            }
            .into());
        }

        if url.host_str().is_none_or(str::is_empty) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
