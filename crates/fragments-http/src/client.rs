//! HTTP transport for the fragments service.

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use fragments_core::auth;
use fragments_core::error::{Error, HttpError, InvalidInputError, NetworkError};
use fragments_core::{ApiResponse, ApiUrl, FragmentContent, Result, Session};

use crate::endpoints::{ErrorResponse, FALLBACK_MEDIA_TYPE};

/// HTTP client bound to one fragments service.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a new client for the given service.
    pub(crate) fn new(api: ApiUrl) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fragments-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(network_error)?;

        Ok(Self { client, api })
    }

    /// Wrap an existing reqwest client.
    pub(crate) fn with_client(api: ApiUrl, client: reqwest::Client) -> Self {
        Self { client, api }
    }

    /// Returns the service URL this client is configured for.
    pub(crate) fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Issue one authorized request and classify its status.
    ///
    /// `content_type` of `None` omits the `Content-Type` header.
    #[instrument(skip(self, session, body), fields(api = %self.api))]
    pub(crate) async fn execute(
        &self,
        method: Method,
        url: Url,
        query: Option<&[(&str, &str)]>,
        session: &Session,
        content_type: Option<&str>,
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        debug!(%method, %url, "fragments request");

        let mut request = self
            .client
            .request(method, url)
            .headers(request_headers(session, content_type)?);
        if let Some(query) = query {
            trace!(?query, "query parameters");
            request = request.query(query);
        }
        if let Some(body) = body {
            trace!(len = body.len(), "request body");
            request = request.body(body);
        }

        let response = request.send().await.map_err(network_error)?;
        let status = response.status();
        trace!(status = %status, "fragments response");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Http(parse_error_response(response).await))
        }
    }

    /// Parse a successful response body as JSON.
    pub(crate) async fn read_json<R: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<ApiResponse<R>> {
        let status = response.status().as_u16();
        let bytes = read_body(response, status).await?;

        let body = serde_json::from_slice::<R>(&bytes)
            .map_err(|e| Error::malformed(status, e.to_string()))?;

        Ok(ApiResponse::new(body, status))
    }

    /// Read a successful response body as raw bytes.
    pub(crate) async fn read_content(
        &self,
        response: Response,
    ) -> Result<ApiResponse<FragmentContent>> {
        let status = response.status().as_u16();
        let media_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(FALLBACK_MEDIA_TYPE)
            .to_string();
        let data = read_body(response, status).await?;

        Ok(ApiResponse::new(FragmentContent { media_type, data }, status))
    }
}

/// Read a 2xx body. The status line already arrived, so a body cut short
/// is a malformed response rather than a network failure.
async fn read_body(response: Response, status: u16) -> Result<Vec<u8>> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::malformed(status, format!("failed to read response body: {}", e)))?;
    Ok(bytes.to_vec())
}

/// Convert the session's authorization headers into a header map.
fn request_headers(session: &Session, content_type: Option<&str>) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let declared = content_type.unwrap_or(auth::DEFAULT_CONTENT_TYPE);

    for (name, value) in session.authorization_headers(declared) {
        if name == auth::CONTENT_TYPE && content_type.is_none() {
            continue;
        }
        let invalid = || InvalidInputError::Header {
            name: name.to_string(),
        };
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
        let header_value = HeaderValue::from_str(&value).map_err(|_| invalid())?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

/// Build an HTTP error from a non-2xx response.
async fn parse_error_response(response: Response) -> HttpError {
    let status = response.status();
    let status_text = status_text(status);

    // The body is informational only; an unreadable or non-JSON body
    // still yields an error carrying the status line.
    let message = match response.bytes().await {
        Ok(bytes) => serde_json::from_slice::<ErrorResponse>(&bytes)
            .ok()
            .and_then(|body| body.error)
            .and_then(|detail| detail.message),
        Err(_) => None,
    };

    HttpError::new(status.as_u16(), status_text, message)
}

fn status_text(status: StatusCode) -> Option<String> {
    status.canonical_reason().map(str::to_string)
}

/// Classify a reqwest failure where no usable response arrived.
pub(crate) fn network_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let err = if err.is_timeout() {
        NetworkError::Timeout { message }
    } else if err.is_connect() {
        NetworkError::Connection { message }
    } else {
        NetworkError::Transport { message }
    };
    Error::Network(err)
}
