//! fragments - command-line client for the fragments service.
//!
//! A thin host over the `fragments-http` client: it resolves the signed-in
//! session once at startup and hands it to every fragment operation.

mod cli;
mod commands;
mod context;
mod output;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::Cli;
use context::AppContext;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let ctx = AppContext::from_cli(&cli)?;

    match commands::handle(cli.command, ctx).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            output::error(&format!("{:#}", e));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Logs go to stderr so fragment bodies on stdout stay clean.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
