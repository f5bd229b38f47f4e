//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs, ctx: &AppContext) -> Result<()> {
    let session = ctx.require_session().await?;

    output::field("User", session.username());
    output::field("API", ctx.config.api_url.as_str());

    Ok(())
}
