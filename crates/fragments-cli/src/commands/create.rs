//! Create command implementation.

use anyhow::{Context, Result, ensure};
use clap::Args;

use fragments_core::{FragmentApi, Session};

use super::{PayloadArgs, supported_type};
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Media type of the body, e.g. text/markdown
    #[arg(long = "type", value_name = "MEDIA_TYPE")]
    pub media_type: String,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

pub async fn run(args: CreateArgs, ctx: &AppContext, session: &Session) -> Result<()> {
    supported_type(&args.media_type)?;

    let payload = args.payload.read().await?;
    ensure!(!payload.is_empty(), "Fragment body is empty");

    let created = ctx
        .client
        .create_fragment(session, &args.media_type, payload)
        .await
        .context("Failed to create fragment")?
        .into_body();

    output::success("Fragment created");
    output::metadata(&created.fragment);
    if let Some(location) = &created.location {
        output::field("Location", location);
    }

    Ok(())
}
