//! Headless games between automated players.

use crate::config::{PlayConfig, PlayerKind};
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players;
use anyhow::Result;
use std::io::Write;
use supertoe_core::{GameStatus, Mark};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Results over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DuelTally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Tied games.
    pub draws: u32,
}

impl DuelTally {
    /// Records one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(_) => self.o_wins += 1,
            GameStatus::Draw | GameStatus::InProgress => self.draws += 1,
        }
    }

    /// Number of games recorded.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays `games` games with the configured players, writing a transcript to `out`.
///
/// Seeds advance by game number so repeated games differ but stay reproducible.
///
/// # Errors
///
/// Rejects human players, and propagates any orchestration or write failure.
#[instrument(skip(config, out), fields(game = %config.game()))]
pub async fn run_duel(config: &PlayConfig, games: u32, out: &mut impl Write) -> Result<DuelTally> {
    for mark in [Mark::X, Mark::O] {
        if config.players().for_mark(mark) == PlayerKind::Human {
            anyhow::bail!("Duels are for automated players; {mark} is set to human");
        }
    }

    let mut tally = DuelTally::default();
    for round in 0..games {
        let config = config.clone().with_overrides(crate::ConfigOverrides {
            seed: config.seed().map(|seed| seed.wrapping_add(2 * u64::from(round))),
            ..Default::default()
        });
        let player_x = players::build(&config, Mark::X, None)?;
        let player_o = players::build(&config, Mark::O, None)?;
        writeln!(
            out,
            "Game {} of {}: {}\n{} (X) vs {} (O)",
            round + 1,
            games,
            config.game().title(),
            player_x.name(),
            player_o.name()
        )?;

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(*config.game(), player_x, player_o, event_tx);
        let status = orchestrator.run().await?;
        drop(orchestrator);

        while let Some(event) = event_rx.recv().await {
            write_event(out, &event)?;
        }
        tally.record(status);
        info!(round, ?status, "Duel game finished");
    }

    writeln!(
        out,
        "X wins: {}, O wins: {}, draws: {}",
        tally.x_wins, tally.o_wins, tally.draws
    )?;
    Ok(tally)
}

fn write_event(out: &mut impl Write, event: &GameEvent) -> Result<()> {
    match event {
        GameEvent::Thinking { mood, .. } => writeln!(out, "{mood}")?,
        GameEvent::MoveMade {
            player,
            mark,
            address,
        } => writeln!(out, "{player} places {mark} at {address}")?,
        GameEvent::MoveRejected { player, reason } => writeln!(out, "{player}: {reason}")?,
        GameEvent::StateChanged(game) => writeln!(out, "{game}\n")?,
        GameEvent::GameOver { winner: Some(name) } => writeln!(out, "{name} wins!\n")?,
        GameEvent::GameOver { winner: None } => writeln!(out, "Cat's game!\n")?,
    }
    Ok(())
}
