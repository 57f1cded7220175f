//! `clash` command line entry point.
//!
//! Loads bots from a data directory, fights battles through the runtime and
//! prints colored logs, or re-verifies saved replays.
mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "clash")]
#[command(about = "Deterministic bot battles", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fight one battle between two roster bots
    Simulate(commands::Simulate),

    /// Fight every pairing in the roster concurrently
    Tournament(commands::Tournament),

    /// Re-run a saved replay and check it against its recorded log
    Replay(commands::Replay),

    /// List arenas and their modifiers
    Arenas(commands::Arenas),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::Tournament(cmd) => cmd.execute().await,
        Command::Replay(cmd) => cmd.execute(),
        Command::Arenas(cmd) => cmd.execute(),
    }
}

/// Logs go to stderr so stdout stays clean for battle output and `--json`.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
