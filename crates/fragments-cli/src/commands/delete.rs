//! Delete command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fragments_core::{FragmentApi, Session};

use super::parse_id;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Fragment ID
    pub id: String,
}

pub async fn run(args: DeleteArgs, ctx: &AppContext, session: &Session) -> Result<()> {
    let id = parse_id(&args.id)?;

    ctx.client
        .delete_fragment(session, &id)
        .await
        .with_context(|| format!("Failed to delete {}", id))?;

    output::success(&format!("Deleted {}", id));
    Ok(())
}
