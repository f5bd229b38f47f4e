//! Fragments endpoint definitions and response body types.

use serde::Deserialize;

use fragments_core::FragmentMetadata;

/// Sub-resource holding a fragment's metadata.
pub const INFO: &str = "info";

/// Query parameter asking the listing for full metadata.
pub const EXPAND: (&str, &str) = ("expand", "1");

/// Media type assumed when a content response carries none.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Response from `GET /v1/fragments`, with or without `expand=1`.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub fragments: Vec<T>,
}

/// Response carrying a single fragment's metadata (create, info, update).
#[derive(Debug, Deserialize)]
pub struct FragmentResponse {
    pub fragment: FragmentMetadata,
}

/// Error body: `{"status":"error","error":{"code":404,"message":"..."}}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<ErrorDetail>,
}

/// Detail of an error body.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}
