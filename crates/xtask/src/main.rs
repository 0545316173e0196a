//! Development tasks for the hexwarden workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;
mod render;
mod script;

use anyhow::Result;
use clap::Parser;
use commands::{Generate, Play, Replay, Verify};

/// Development tasks for hexwarden
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for hexwarden", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print a generated floor layout
    Generate(Generate),

    /// Replay an action log and print per-step fingerprints
    Replay(Replay),

    /// Replay an action log several times and check the runs agree
    Verify(Verify),

    /// Apply a compact action script to a fresh run
    Play(Play),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for HEXWARDEN_* settings)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
        Command::Verify(cmd) => cmd.execute(),
        Command::Play(cmd) => cmd.execute(),
    }
}
