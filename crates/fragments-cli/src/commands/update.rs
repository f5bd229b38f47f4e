//! Update command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fragments_core::{FragmentApi, Session};

use super::{PayloadArgs, parse_id, supported_type};
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Fragment ID
    pub id: String,

    /// Media type of the new body. The server rejects a change of type.
    #[arg(long = "type", value_name = "MEDIA_TYPE")]
    pub media_type: Option<String>,

    #[command(flatten)]
    pub payload: PayloadArgs,
}

pub async fn run(args: UpdateArgs, ctx: &AppContext, session: &Session) -> Result<()> {
    let id = parse_id(&args.id)?;
    if let Some(media_type) = &args.media_type {
        supported_type(media_type)?;
    }

    let payload = args.payload.read().await?;

    let fragment = ctx
        .client
        .update_fragment(session, &id, payload, args.media_type.as_deref())
        .await
        .with_context(|| format!("Failed to update {}", id))?
        .into_body();

    output::success("Fragment updated");
    output::metadata(&fragment);

    Ok(())
}
