//! Startup wiring shared by every command.

use anyhow::{Context, Result};
use tracing::debug;

use fragments_core::{ApiUrl, Config, Session, SessionProvider};
use fragments_http::HttpFragmentClient;
use fragments_session::FileSessionProvider;

use crate::cli::Cli;

/// Everything a command needs, built once from the environment and flags.
pub struct AppContext {
    pub config: Config,
    pub provider: FileSessionProvider,
    pub client: HttpFragmentClient,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = Config::from_env().context("Invalid environment configuration")?;

        if let Some(api_url) = &cli.api_url {
            config.api_url = ApiUrl::new(api_url).context("Invalid --api-url")?;
        }
        if let Some(path) = &cli.session_file {
            config.session_file = Some(path.clone());
        }

        let provider =
            FileSessionProvider::from_config(&config).context("Failed to locate session store")?;
        let client = HttpFragmentClient::from_config(&config)
            .context("Failed to initialize HTTP client")?;

        debug!(
            api = %config.api_url,
            session_file = %provider.store().path().display(),
            "Configured"
        );

        Ok(Self {
            config,
            provider,
            client,
        })
    }

    /// Resolve the signed-in session or fail with a hint to sign in.
    pub async fn require_session(&self) -> Result<Session> {
        self.provider
            .resolve_session()
            .await
            .context("Failed to load session")?
            .context("Not signed in. Run 'fragments login' first.")
    }
}
