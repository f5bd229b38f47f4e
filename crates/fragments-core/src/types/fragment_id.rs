//! Fragment identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A server-assigned fragment identifier.
///
/// Ids are opaque; the client only guarantees that an id fits in a single
/// URL path segment. A `.` is rejected: the service reads `{id}.{ext}` as a
/// conversion request, so `abc.md` could never name a fragment.
///
/// # Example
///
/// ```
/// use fragments_core::FragmentId;
///
/// let id = FragmentId::new("30a84843-0cd4-4975-95ba-b96112aea189").unwrap();
/// assert_eq!(id.as_str(), "30a84843-0cd4-4975-95ba-b96112aea189");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FragmentId(String);

impl FragmentId {
    /// Create a new fragment id, validating that it is path-safe.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, too long, or contains `/`, `.`,
    /// whitespace or control characters.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        let reason = if s.is_empty() {
            Some("cannot be empty")
        } else if s.len() > 256 {
            Some("exceeds maximum length of 256 characters")
        } else if s.contains('.') {
            Some("cannot contain '.'")
        } else if s.contains('/') {
            Some("cannot contain '/'")
        } else if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Some("cannot contain whitespace or control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(InvalidInputError::FragmentId {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FragmentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FragmentId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FragmentId> for String {
    fn from(id: FragmentId) -> Self {
        id.0
    }
}

impl AsRef<str> for FragmentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
