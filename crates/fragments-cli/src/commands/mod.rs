//! Subcommand implementations.

pub mod create;
pub mod delete;
pub mod get;
pub mod info;
pub mod list;
pub mod login;
pub mod logout;
pub mod update;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use tokio::io::AsyncReadExt;

use fragments_core::{ContentKind, FragmentId};

use crate::cli::Commands;
use crate::context::AppContext;

pub async fn handle(command: Commands, ctx: AppContext) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args, &ctx).await,
        Commands::Logout(args) => logout::run(args, &ctx).await,
        Commands::Whoami(args) => whoami::run(args, &ctx).await,
        Commands::List(args) => list::run(args, &ctx, &ctx.require_session().await?).await,
        Commands::Create(args) => create::run(args, &ctx, &ctx.require_session().await?).await,
        Commands::Get(args) => get::run(args, &ctx, &ctx.require_session().await?).await,
        Commands::Info(args) => info::run(args, &ctx, &ctx.require_session().await?).await,
        Commands::Update(args) => update::run(args, &ctx, &ctx.require_session().await?).await,
        Commands::Delete(args) => delete::run(args, &ctx, &ctx.require_session().await?).await,
    }
}

/// Where a fragment body comes from: a file, an inline string, or stdin.
#[derive(Args, Debug)]
pub struct PayloadArgs {
    /// Read the body from a file
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,

    /// Use the given string as the body
    #[arg(long)]
    pub data: Option<String>,
}

impl PayloadArgs {
    pub async fn read(&self) -> Result<Vec<u8>> {
        if let Some(path) = &self.file {
            return tokio::fs::read(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()));
        }
        if let Some(data) = &self.data {
            return Ok(data.as_bytes().to_vec());
        }

        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("Failed to read body from stdin")?;
        Ok(buf)
    }
}

pub fn parse_id(id: &str) -> Result<FragmentId> {
    FragmentId::new(id).context("Invalid fragment ID")
}

/// Check that `media_type` is a kind the fragments service stores.
pub fn supported_type(media_type: &str) -> Result<ContentKind> {
    match ContentKind::from_media_type(media_type) {
        Some(kind) => Ok(kind),
        None => {
            let supported: Vec<&str> = ContentKind::ALL.iter().map(|k| k.media_type()).collect();
            bail!(
                "Unsupported fragment type '{}'. Supported: {}",
                media_type,
                supported.join(", ")
            )
        }
    }
}
