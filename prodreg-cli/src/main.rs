//! prodreg — org-wide product registration CLI.
//!
//! # Usage
//!
//! ```text
//! prodreg start --product-name <name> [--description <desc>] [--dir <repo>]
//! prodreg sync [--registry <path>] [--item <name>[=<desc>]]... [--dry-run]
//! prodreg sync --repo <dir>... [--registry <path>] [--dry-run]
//! prodreg list [--registry <path>] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, start::StartArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "prodreg",
    version,
    about = "Register org products and sync them into the central registry",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bootstrap a product repository: CI workflow plus registration file.
    Start(StartArgs),

    /// Merge product records into the registry.
    Sync(SyncArgs),

    /// Show the products in the registry.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Start(args) => args.run(),
        Commands::Sync(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
