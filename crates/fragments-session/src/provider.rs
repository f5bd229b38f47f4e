//! [`SessionProvider`] backed by the session file.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use fragments_core::{Config, Result, Session, SessionProvider};

use crate::store::FileSessionStore;

/// Resolves the signed-in caller from a [`FileSessionStore`].
///
/// Resolution is a fresh read of the store every time; nothing is cached.
#[derive(Debug, Clone)]
pub struct FileSessionProvider {
    store: FileSessionStore,
}

impl FileSessionProvider {
    pub fn new(store: FileSessionStore) -> Self {
        Self { store }
    }

    /// Create a provider for the session file named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(FileSessionStore::from_config(config)?))
    }

    pub fn store(&self) -> &FileSessionStore {
        &self.store
    }
}

#[async_trait]
impl SessionProvider for FileSessionProvider {
    #[instrument(skip(self), fields(path = %self.store.path().display()))]
    async fn resolve_session(&self) -> Result<Option<Session>> {
        match self.store.load().await {
            Ok(Some(session)) => {
                info!(user = %session.username(), "Resolved session");
                Ok(Some(session))
            }
            Ok(None) => {
                info!("No user signed in");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Session store unavailable");
                Err(e)
            }
        }
    }
}
