//! Session persistence.

use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

use fragments_core::error::AuthError;
use fragments_core::{AccessToken, Config, IdToken, Result, Session};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// File name used inside the per-user data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Stored session data.
#[derive(Serialize, Deserialize)]
struct StoredSession {
    username: String,
    id_token: String,
    access_token: String,
}

impl From<&Session> for StoredSession {
    fn from(session: &Session) -> Self {
        Self {
            username: session.username().to_string(),
            id_token: session.id_token().as_str().to_string(),
            access_token: session.access_token().as_str().to_string(),
        }
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Session::new(
            stored.username,
            IdToken::new(stored.id_token),
            AccessToken::new(stored.access_token),
        )
    }
}

/// A single JSON file holding the signed-in session.
///
/// A missing file means nobody is signed in. Anything else that goes wrong
/// (permissions, garbage contents) is an [`AuthError`].
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the per-user default location.
    pub fn at_default_path() -> Result<Self> {
        Ok(Self::new(Self::default_path()?))
    }

    /// Create a store at the configured location, or the default one.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.session_file {
            Some(path) => Ok(Self::new(path)),
            None => Self::at_default_path(),
        }
    }

    /// Returns the per-user default session file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "fragments").ok_or_else(|| AuthError::NotConfigured {
            reason: "could not determine the user data directory".to_string(),
        })?;
        Ok(dirs.data_dir().join(SESSION_FILE_NAME))
    }

    /// Returns the session file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    /// Load the stored session, if any.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<Option<Session>> {
        let json = match fs::read_to_string(&self.path).await {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No session file");
                return Ok(None);
            }
            Err(e) => {
                return Err(AuthError::Unreadable {
                    path: self.display_path(),
                    message: e.to_string(),
                }
                .into());
            }
        };

        let stored: StoredSession =
            serde_json::from_str(&json).map_err(|e| AuthError::Corrupt {
                path: self.display_path(),
                message: e.to_string(),
            })?;

        if stored.id_token.is_empty() {
            return Err(AuthError::Corrupt {
                path: self.display_path(),
                message: "identity token is empty".to_string(),
            }
            .into());
        }

        Ok(Some(stored.into()))
    }

    /// Persist `session`, replacing whatever was stored.
    #[instrument(skip(self, session), fields(path = %self.path.display()))]
    pub async fn save(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string_pretty(&StoredSession::from(session))
            .map_err(|e| self.write_failed(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_failed(e))?;
        }

        let mut file = self
            .open_private()
            .await
            .map_err(|e| self.write_failed(e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| self.write_failed(e))?;
        file.sync_all().await.map_err(|e| self.write_failed(e))?;

        debug!("Session saved");
        Ok(())
    }

    /// Open the session file for writing with owner-only permissions.
    ///
    /// A new file is created as 0600. An existing file is truncated and
    /// tightened before any token bytes are written to it.
    async fn open_private(&self) -> io::Result<fs::File> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let file = options.open(&self.path).await?;

        #[cfg(unix)]
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .await?;

        Ok(file)
    }

    /// Remove the stored session. Clearing an empty store succeeds.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!("Session cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_failed(e).into()),
        }
    }

    fn write_failed(&self, e: impl ToString) -> AuthError {
        AuthError::WriteFailed {
            path: self.display_path(),
            message: e.to_string(),
        }
    }
}
