//! Supertoe - Classic and Super tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use supertoe::cli::{Cli, Command, GameArgs};
use supertoe::{PlayConfig, run_duel};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Duel { args, games } => run_headless(args, games).await,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[instrument(skip(args), fields(config = %args.config.display()))]
fn load_config(args: &GameArgs) -> Result<PlayConfig> {
    Ok(PlayConfig::load(&args.config)?.with_overrides(args.overrides()))
}

/// Run the terminal UI
async fn run_play(args: GameArgs) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("supertoe.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = load_config(&args)?;
    info!(?config, "Starting play");
    supertoe::tui::run_tui(config).await
}

/// Run automated games and print the transcript
async fn run_headless(args: GameArgs, games: u32) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    info!(?config, games, "Starting duel");
    let mut stdout = std::io::stdout().lock();
    run_duel(&config, games, &mut stdout).await?;
    Ok(())
}
