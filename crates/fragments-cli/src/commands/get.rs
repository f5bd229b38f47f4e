//! Get command implementation.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use fragments_core::{ContentKind, FragmentApi, FragmentContent, FragmentId, Session};

use super::parse_id;
use crate::context::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Fragment ID
    pub id: String,

    /// Ask the server to convert to this extension (e.g. html, txt, png)
    #[arg(long)]
    pub ext: Option<String>,

    /// Write the content to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: GetArgs, ctx: &AppContext, session: &Session) -> Result<()> {
    let id = parse_id(&args.id)?;

    let content = match &args.ext {
        Some(ext) => fetch_converted(ctx, session, &id, ext).await?,
        None => ctx
            .client
            .get_fragment_content(session, &id)
            .await
            .with_context(|| format!("Failed to get {}", id))?
            .into_body(),
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &content.data)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::note(&format!(
                "Wrote {} bytes ({}) to {}",
                content.data.len(),
                content.media_type,
                path.display()
            ));
        }
        None => {
            if is_binary(&content) {
                bail!(
                    "{} is binary ({}); use --output to save it",
                    id,
                    content.media_type
                );
            }
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&content.data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}

async fn fetch_converted(
    ctx: &AppContext,
    session: &Session,
    id: &FragmentId,
    ext: &str,
) -> Result<FragmentContent> {
    let ext = ext.trim_start_matches('.');
    let Some(target) = ContentKind::from_extension(ext) else {
        bail!("Unknown conversion extension '.{}'", ext);
    };

    let metadata = ctx
        .client
        .get_fragment_metadata(session, id)
        .await
        .with_context(|| format!("Failed to get metadata for {}", id))?
        .into_body();

    // Unknown source types are left to the server to judge.
    if let Some(source) = metadata.content_kind()
        && !source.can_convert_to(target)
    {
        bail!(
            "A {} fragment cannot be converted to .{}",
            source.media_type(),
            ext
        );
    }

    let content = ctx
        .client
        .get_fragment_converted(session, id, ext)
        .await
        .with_context(|| format!("Failed to convert {} to .{}", id, ext))?
        .into_body();

    Ok(content)
}

fn is_binary(content: &FragmentContent) -> bool {
    match content.content_kind() {
        Some(kind) => !kind.is_text(),
        None => !content.media_type.starts_with("text/"),
    }
}
