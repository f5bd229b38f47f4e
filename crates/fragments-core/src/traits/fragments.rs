//! Fragment API trait.

use async_trait::async_trait;

use crate::fragment::{ApiResponse, CreatedFragment, FragmentContent, FragmentMetadata};
use crate::types::FragmentId;
use crate::{Result, Session};

/// Remote fragment operations.
///
/// Every call is an independent round trip authorized by the given
/// session. Implementations hold no per-call state, never retry, and report
/// every failure as an [`Error`](crate::Error) rather than panicking.
#[async_trait]
pub trait FragmentApi: Send + Sync {
    /// List the ids of the caller's fragments. An empty account yields an
    /// empty vector.
    async fn list_fragments(&self, session: &Session) -> Result<ApiResponse<Vec<FragmentId>>>;

    /// List the caller's fragments with full metadata.
    async fn list_fragments_expanded(
        &self,
        session: &Session,
    ) -> Result<ApiResponse<Vec<FragmentMetadata>>>;

    /// Create a fragment. The payload is forwarded as-is with `media_type`
    /// as its content type.
    async fn create_fragment(
        &self,
        session: &Session,
        media_type: &str,
        payload: Vec<u8>,
    ) -> Result<ApiResponse<CreatedFragment>>;

    /// Fetch a fragment's raw payload.
    async fn get_fragment_content(
        &self,
        session: &Session,
        id: &FragmentId,
    ) -> Result<ApiResponse<FragmentContent>>;

    /// Fetch a fragment converted by the service to the type named by
    /// `extension` (e.g. `html`, `png`).
    async fn get_fragment_converted(
        &self,
        session: &Session,
        id: &FragmentId,
        extension: &str,
    ) -> Result<ApiResponse<FragmentContent>>;

    /// Fetch a fragment's metadata without its payload.
    async fn get_fragment_metadata(
        &self,
        session: &Session,
        id: &FragmentId,
    ) -> Result<ApiResponse<FragmentMetadata>>;

    /// Replace a fragment's payload. Whether the media type may change is
    /// up to the server; `None` sends no content type at all.
    async fn update_fragment(
        &self,
        session: &Session,
        id: &FragmentId,
        payload: Vec<u8>,
        media_type: Option<&str>,
    ) -> Result<ApiResponse<FragmentMetadata>>;

    /// Delete a fragment. Deleting again yields a not-found error.
    async fn delete_fragment(&self, session: &Session, id: &FragmentId)
    -> Result<ApiResponse<()>>;
}
