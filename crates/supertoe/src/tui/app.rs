//! Application state and logic.

use crate::orchestrator::GameEvent;
use std::collections::VecDeque;
use supertoe_core::{GameState, Variant};
use tracing::debug;

/// Log lines kept on screen.
const LOG_LINES: usize = 6;

/// Main application state.
pub struct App {
    game: GameState,
    matchup: String,
    status_message: String,
    log: VecDeque<String>,
    game_over: bool,
}

impl App {
    /// Creates a new application for a game between the named players.
    pub fn new(variant: Variant, x_name: &str, o_name: &str) -> Self {
        Self {
            game: GameState::new(variant),
            matchup: format!("{x_name} (X) vs {o_name} (O)"),
            status_message: "Waiting for the first move.".to_string(),
            log: VecDeque::with_capacity(LOG_LINES),
            game_over: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Who is playing whom.
    pub fn matchup(&self) -> &str {
        &self.matchup
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Recent moves and notices, oldest first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// True once a winner or a tie has been announced.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Applies an orchestrator event.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");
        match event {
            GameEvent::Thinking { player, mood } => {
                self.status_message = if mood.starts_with(&player) {
                    mood
                } else {
                    format!("{player}: {mood} Enter row, then column.")
                };
            }
            GameEvent::MoveMade {
                player,
                mark,
                address,
            } => self.push_log(format!("{player} placed {mark} at {address}")),
            GameEvent::MoveRejected { reason, .. } => {
                self.status_message = format!("{reason} Try again.");
                self.push_log(reason);
            }
            GameEvent::StateChanged(game) => self.game = game,
            GameEvent::GameOver { winner } => {
                self.game_over = true;
                self.status_message = match winner {
                    Some(name) => format!("{name} wins! Press 'r' to restart or 'q' to quit."),
                    None => "Cat's game! Press 'r' to restart or 'q' to quit.".to_string(),
                };
            }
        }
    }

    /// Records an error that ended the game.
    pub fn abort(&mut self, reason: &str) {
        self.game_over = true;
        self.status_message = format!("Game stopped: {reason}");
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == LOG_LINES {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }
}
