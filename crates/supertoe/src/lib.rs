//! Playable tic-tac-toe on top of `supertoe_core`.
//!
//! Wires the search engine and simpler automated opponents into an
//! interactive terminal game and a headless duel runner.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod duel;
pub mod orchestrator;
pub mod players;
pub mod tui;

pub use config::{ConfigError, ConfigOverrides, PlayConfig, PlayerKind, PlayerSlots};
pub use duel::{DuelTally, run_duel};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::Player;
