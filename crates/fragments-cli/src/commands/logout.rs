//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, ctx: &AppContext) -> Result<()> {
    ctx.provider
        .store()
        .clear()
        .await
        .context("Failed to clear session")?;

    output::success("Signed out");
    Ok(())
}
