//! List command implementation.

use anyhow::{Context, Result};
use clap::Args;

use fragments_core::{FragmentApi, Session};

use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Include each fragment's metadata
    #[arg(long)]
    pub expand: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "expand")]
    pub pretty: bool,
}

pub async fn run(args: ListArgs, ctx: &AppContext, session: &Session) -> Result<()> {
    if !args.expand {
        let ids = ctx
            .client
            .list_fragments(session)
            .await
            .context("Failed to list fragments")?
            .into_body();

        if ids.is_empty() {
            output::note("No fragments found.");
        }
        for id in &ids {
            println!("{}", id);
        }
        return Ok(());
    }

    let fragments = ctx
        .client
        .list_fragments_expanded(session)
        .await
        .context("Failed to list fragments")?
        .into_body();

    if fragments.is_empty() {
        output::note("No fragments found.");
    }
    for fragment in &fragments {
        if args.pretty {
            output::json_pretty(fragment)?;
        } else {
            output::json(fragment)?;
        }
    }

    Ok(())
}
