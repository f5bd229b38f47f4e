//! Client configuration.

use std::path::PathBuf;

use crate::Result;
use crate::types::ApiUrl;

/// Fragments service used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Environment variable naming the service base URL.
pub const API_URL_VAR: &str = "API_URL";

/// Environment variable overriding the session file location.
pub const SESSION_FILE_VAR: &str = "FRAGMENTS_SESSION_FILE";

/// Startup configuration, built once and passed to the components that
/// need it.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `API_URL` | `http://localhost:8080` | Base URL of the fragments service |
/// | `FRAGMENTS_SESSION_FILE` | per-user data dir | Where the signed-in session is stored |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the fragments service.
    pub api_url: ApiUrl,

    /// Session file. `None` means the store picks its default location.
    pub session_file: Option<PathBuf>,
}

impl Config {
    /// Build a config from explicit values.
    pub fn new(api_url: ApiUrl, session_file: Option<PathBuf>) -> Self {
        Self {
            api_url,
            session_file,
        }
    }

    /// Populate config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_URL` is set but is not a valid URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Populate config from an arbitrary variable lookup, applying defaults
    /// for absent or empty values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = ApiUrl::new(var(API_URL_VAR).as_deref().unwrap_or(DEFAULT_API_URL))?;
        let session_file = var(SESSION_FILE_VAR).map(PathBuf::from);

        Ok(Self {
            api_url,
            session_file,
        })
    }
}
