//! Info command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fragments_core::{FragmentApi, Session};

use super::parse_id;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Fragment ID
    pub id: String,

    /// Print the metadata as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: InfoArgs, ctx: &AppContext, session: &Session) -> Result<()> {
    let id = parse_id(&args.id)?;

    let fragment = ctx
        .client
        .get_fragment_metadata(session, &id)
        .await
        .with_context(|| format!("Failed to get metadata for {}", id))?
        .into_body();

    if args.json {
        output::json_pretty(&fragment)?;
    } else {
        output::metadata(&fragment);
    }

    Ok(())
}
