//! Command-line interface for supertoe.

use crate::config::{ConfigOverrides, PlayerKind};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use supertoe_core::Variant;

/// Supertoe - Classic and Super tic-tac-toe against search-driven opponents
#[derive(Parser, Debug)]
#[command(name = "supertoe")]
#[command(about = "Play 3x3 or 4x4 tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(GameArgs),

    /// Pit two automated players against each other without a UI
    Duel {
        /// Shared game settings
        #[command(flatten)]
        args: GameArgs,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1")]
        games: u32,
    },
}

/// Settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Path to config file
    #[arg(short, long, default_value = "supertoe.toml")]
    pub config: PathBuf,

    /// Board variant (classic or super)
    #[arg(short, long)]
    pub game: Option<Variant>,

    /// Player for X
    #[arg(long, value_enum)]
    pub x: Option<PlayerKind>,

    /// Player for O
    #[arg(long, value_enum)]
    pub o: Option<PlayerKind>,

    /// Thinking time per flawless move, in milliseconds
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameArgs {
    /// Flags given on the command line, as config overrides.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            game: self.game,
            x: self.x,
            o: self.o,
            time_budget_ms: self.time_budget_ms,
            seed: self.seed,
        }
    }
}
