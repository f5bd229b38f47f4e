//! Session provider trait.

use async_trait::async_trait;

use crate::{Result, Session};

/// Resolves the current authenticated caller.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Look up the signed-in identity.
    ///
    /// Returns `Ok(None)` when nobody is signed in. Errors are reserved for
    /// an identity integration that cannot be reached or is misconfigured.
    async fn resolve_session(&self) -> Result<Option<Session>>;
}
