//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{create, delete, get, info, list, login, logout, update, whoami};

/// Client for the fragments service.
#[derive(Parser, Debug)]
#[command(name = "fragments")]
#[command(author, version = env!("FRAGMENTS_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Fragments service base URL (overrides API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Session file (overrides FRAGMENTS_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the tokens returned by the hosted sign-in page
    Login(login::LoginArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Display the signed-in user
    Whoami(whoami::WhoamiArgs),

    /// List your fragments
    List(list::ListArgs),

    /// Create a fragment
    Create(create::CreateArgs),

    /// Fetch a fragment's content, optionally converted
    Get(get::GetArgs),

    /// Show a fragment's metadata
    Info(info::InfoArgs),

    /// Replace a fragment's content
    Update(update::UpdateArgs),

    /// Delete a fragment
    Delete(delete::DeleteArgs),
}
