//! Fragment types as observed by the client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ContentKind, FragmentId};

/// Metadata of a stored fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentMetadata {
    /// Server-assigned identifier.
    pub id: FragmentId,

    /// Owner, scoped by the credential that created the fragment.
    pub owner_id: String,

    /// Creation time. Preserved across updates.
    pub created: DateTime<Utc>,

    /// Time of the last payload replacement.
    pub updated: DateTime<Utc>,

    /// Media type of the payload, including any parameters.
    #[serde(rename = "type")]
    pub media_type: String,

    /// Payload length in bytes.
    pub size: u64,
}

impl FragmentMetadata {
    /// Resolve the media type into a supported kind, if it is one.
    pub fn content_kind(&self) -> Option<ContentKind> {
        ContentKind::from_media_type(&self.media_type)
    }
}

/// A fragment's raw payload together with the media type the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentContent {
    /// Value of the response `Content-Type` header.
    pub media_type: String,

    /// Raw payload bytes.
    pub data: Vec<u8>,
}

impl FragmentContent {
    /// Resolve the media type into a supported kind, if it is one.
    pub fn content_kind(&self) -> Option<ContentKind> {
        ContentKind::from_media_type(&self.media_type)
    }
}

/// Result of a create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFragment {
    /// Metadata of the new fragment.
    pub fragment: FragmentMetadata,

    /// The `Location` header, when the server sent one.
    pub location: Option<String>,
}

/// A successful response: the parsed body and the status it arrived with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    /// Parsed body.
    pub body: T,

    /// HTTP status code (always 2xx).
    pub status: u16,
}

impl<T> ApiResponse<T> {
    /// Create a new response.
    pub fn new(body: T, status: u16) -> Self {
        Self { body, status }
    }

    /// Discard the status and keep the body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transform the body, keeping the status.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            body: f(self.body),
            status: self.status,
        }
    }
}
