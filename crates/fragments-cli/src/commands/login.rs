//! Login command implementation.

use anyhow::{Context, Result, ensure};
use clap::Args;

use fragments_core::{AccessToken, IdToken, Session};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username shown for the signed-in identity
    #[arg(long)]
    pub username: String,

    /// Identity token from the hosted sign-in page
    #[arg(long, env = "FRAGMENTS_ID_TOKEN", hide_env_values = true)]
    pub id_token: String,

    /// Access token from the hosted sign-in page
    #[arg(long, env = "FRAGMENTS_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,
}

pub async fn run(args: LoginArgs, ctx: &AppContext) -> Result<()> {
    ensure!(!args.username.trim().is_empty(), "Username cannot be empty");
    ensure!(!args.id_token.trim().is_empty(), "Identity token cannot be empty");

    let session = Session::new(
        args.username.trim(),
        IdToken::new(args.id_token.trim()),
        AccessToken::new(args.access_token.trim()),
    );

    let store = ctx.provider.store();
    store.save(&session).await.context("Failed to save session")?;

    output::success(&format!("Signed in as {}", session.username()));
    output::field("Session file", &store.path().display().to_string());

    Ok(())
}
