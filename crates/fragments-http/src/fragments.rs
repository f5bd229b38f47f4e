//! HTTP-backed fragment API implementation.

use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::LOCATION;
use tracing::{debug, instrument};

use fragments_core::auth::DEFAULT_CONTENT_TYPE;
use fragments_core::error::InvalidInputError;
use fragments_core::{
    ApiResponse, ApiUrl, Config, CreatedFragment, FragmentApi, FragmentContent, FragmentId,
    FragmentMetadata, Result, Session,
};

use crate::client::HttpClient;
use crate::endpoints::{EXPAND, FragmentResponse, INFO, ListResponse};

/// A network-backed fragment API client.
///
/// The client is stateless between calls: cloning it is cheap and every
/// operation is one independent round trip.
///
/// # Example
///
/// ```no_run
/// use fragments_core::{AccessToken, ApiUrl, FragmentApi, IdToken, Session};
/// use fragments_http::HttpFragmentClient;
///
/// # async fn example() -> Result<(), fragments_core::Error> {
/// let client = HttpFragmentClient::new(ApiUrl::new("http://localhost:8080")?)?;
/// let session = Session::new("alice", IdToken::new("id-token"), AccessToken::new("access"));
///
/// let created = client
///     .create_fragment(&session, "text/plain", b"hello".to_vec())
///     .await?;
/// assert_eq!(created.body.fragment.size, 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpFragmentClient {
    client: HttpClient,
}

impl HttpFragmentClient {
    /// Create a client for the given service.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP stack cannot be initialized.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(api)?,
        })
    }

    /// Create a client for the service named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_url.clone())
    }

    /// Create a client that sends through an existing reqwest client, e.g.
    /// one configured with a transport timeout.
    pub fn with_http_client(api: ApiUrl, client: reqwest::Client) -> Self {
        Self {
            client: HttpClient::with_client(api, client),
        }
    }

    /// Returns the service URL for this client.
    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }

    async fn fetch_metadata(
        &self,
        method: Method,
        segments: &[&str],
        session: &Session,
        content_type: Option<&str>,
        payload: Option<Vec<u8>>,
    ) -> Result<ApiResponse<FragmentMetadata>> {
        let url = self.api().fragments_url(segments);
        let response = self
            .client
            .execute(method, url, None, session, content_type, payload)
            .await?;

        let response: ApiResponse<FragmentResponse> = self.client.read_json(response).await?;
        Ok(response.map(|r| r.fragment))
    }

    async fn fetch_content(
        &self,
        segment: &str,
        session: &Session,
    ) -> Result<ApiResponse<FragmentContent>> {
        let url = self.api().fragments_url(&[segment]);
        let response = self
            .client
            .execute(Method::GET, url, None, session, Some(DEFAULT_CONTENT_TYPE), None)
            .await?;

        self.client.read_content(response).await
    }
}

#[async_trait]
impl FragmentApi for HttpFragmentClient {
    #[instrument(skip(self, session), fields(api = %self.api(), user = %session.username()))]
    async fn list_fragments(&self, session: &Session) -> Result<ApiResponse<Vec<FragmentId>>> {
        debug!("Listing fragments");

        let url = self.api().fragments_url(&[]);
        let response = self
            .client
            .execute(Method::GET, url, None, session, Some(DEFAULT_CONTENT_TYPE), None)
            .await?;

        let response: ApiResponse<ListResponse<FragmentId>> =
            self.client.read_json(response).await?;
        Ok(response.map(|r| r.fragments))
    }

    #[instrument(skip(self, session), fields(api = %self.api(), user = %session.username()))]
    async fn list_fragments_expanded(
        &self,
        session: &Session,
    ) -> Result<ApiResponse<Vec<FragmentMetadata>>> {
        debug!("Listing fragments with metadata");

        let url = self.api().fragments_url(&[]);
        let response = self
            .client
            .execute(
                Method::GET,
                url,
                Some(&[EXPAND][..]),
                session,
                Some(DEFAULT_CONTENT_TYPE),
                None,
            )
            .await?;

        let response: ApiResponse<ListResponse<FragmentMetadata>> =
            self.client.read_json(response).await?;
        Ok(response.map(|r| r.fragments))
    }

    #[instrument(
        skip(self, session, payload),
        fields(api = %self.api(), user = %session.username(), len = payload.len())
    )]
    async fn create_fragment(
        &self,
        session: &Session,
        media_type: &str,
        payload: Vec<u8>,
    ) -> Result<ApiResponse<CreatedFragment>> {
        debug!("Creating fragment");

        if payload.is_empty() {
            return Err(InvalidInputError::Other {
                message: "fragment payload cannot be empty".to_string(),
            }
            .into());
        }

        let url = self.api().fragments_url(&[]);
        let response = self
            .client
            .execute(
                Method::POST,
                url,
                None,
                session,
                Some(media_type),
                Some(payload),
            )
            .await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let response: ApiResponse<FragmentResponse> = self.client.read_json(response).await?;
        debug!(id = %response.body.fragment.id, "Fragment created");

        Ok(response.map(|r| CreatedFragment {
            fragment: r.fragment,
            location,
        }))
    }

    #[instrument(skip(self, session), fields(api = %self.api(), user = %session.username(), %id))]
    async fn get_fragment_content(
        &self,
        session: &Session,
        id: &FragmentId,
    ) -> Result<ApiResponse<FragmentContent>> {
        debug!("Getting fragment content");
        self.fetch_content(id.as_str(), session).await
    }

    #[instrument(skip(self, session), fields(api = %self.api(), user = %session.username(), %id))]
    async fn get_fragment_converted(
        &self,
        session: &Session,
        id: &FragmentId,
        extension: &str,
    ) -> Result<ApiResponse<FragmentContent>> {
        debug!("Getting converted fragment");

        let extension = extension.trim_start_matches('.');
        if extension.is_empty() || !extension.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(InvalidInputError::Other {
                message: format!("invalid conversion extension '{}'", extension),
            }
            .into());
        }

        let segment = format!("{}.{}", id, extension);
        self.fetch_content(&segment, session).await
    }

    #[instrument(skip(self, session), fields(api = %self.api(), user = %session.username(), %id))]
    async fn get_fragment_metadata(
        &self,
        session: &Session,
        id: &FragmentId,
    ) -> Result<ApiResponse<FragmentMetadata>> {
        debug!("Getting fragment metadata");
        self.fetch_metadata(
            Method::GET,
            &[id.as_str(), INFO],
            session,
            Some(DEFAULT_CONTENT_TYPE),
            None,
        )
        .await
    }

    #[instrument(
        skip(self, session, payload),
        fields(api = %self.api(), user = %session.username(), %id, len = payload.len())
    )]
    async fn update_fragment(
        &self,
        session: &Session,
        id: &FragmentId,
        payload: Vec<u8>,
        media_type: Option<&str>,
    ) -> Result<ApiResponse<FragmentMetadata>> {
        debug!("Updating fragment");
        self.fetch_metadata(
            Method::PUT,
            &[id.as_str()],
            session,
            media_type,
            Some(payload),
        )
        .await
    }

    #[instrument(skip(self, session), fields(api = %self.api(), user = %session.username(), %id))]
    async fn delete_fragment(
        &self,
        session: &Session,
        id: &FragmentId,
    ) -> Result<ApiResponse<()>> {
        debug!("Deleting fragment");

        let url = self.api().fragments_url(&[id.as_str()]);
        let response = self
            .client
            .execute(Method::DELETE, url, None, session, Some(DEFAULT_CONTENT_TYPE), None)
            .await?;

        Ok(ApiResponse::new((), response.status().as_u16()))
    }
}
