//! Game orchestration between players.

use crate::players::Player;
use anyhow::Result;
use std::time::Duration;
use supertoe_core::{Address, GameError, GameState, GameStatus, Mark, Variant};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A player is about to move.
    Thinking {
        /// Player name.
        player: String,
        /// What the player is up to.
        mood: String,
    },
    /// Move was made.
    MoveMade {
        /// Player name.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        address: Address,
    },
    /// A human tried an occupied square and will be asked again.
    MoveRejected {
        /// Player name.
        player: String,
        /// Why the move was refused.
        reason: String,
    },
    /// Game state updated.
    StateChanged(GameState),
    /// Game ended; `None` means a tie.
    GameOver {
        /// Name of the winning player.
        winner: Option<String>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: GameState,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    pace: Duration,
}

impl Orchestrator {
    /// Creates a new orchestrator for a fresh game of `variant`.
    pub fn new(
        variant: Variant,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: GameState::new(variant),
            player_x,
            player_o,
            event_tx,
            pace: Duration::ZERO,
        }
    }

    /// Pause after every move so automated games can be watched.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Current position.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Runs the game loop until a win or a tie.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move, an automated player picks
    /// an occupied square, any player picks a square off the board, or the
    /// UI side of the event channel has gone away.
    #[instrument(skip(self), fields(variant = %self.game.variant()))]
    pub async fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");
        self.event_tx.send(GameEvent::StateChanged(self.game.clone()))?;

        loop {
            let status = self.game.status();
            if status != GameStatus::InProgress {
                let winner = match status {
                    GameStatus::Won(mark) => Some(self.player(mark).name().to_string()),
                    _ => None,
                };
                info!(?status, ?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { winner })?;
                return Ok(status);
            }

            let mark = self.game.next_mark();
            let game = self.game.clone();
            let (name, mood, is_human) = {
                let player = self.player(mark);
                (player.name().to_string(), player.mood(&game), player.is_human())
            };
            self.event_tx.send(GameEvent::Thinking {
                player: name.clone(),
                mood,
            })?;

            debug!(player = %name, %mark, "Waiting for move");
            let address = self.player_mut(mark).get_move(&game).await?;

            if !self.game.contains(address) {
                anyhow::bail!("{name} chose {address}, which is off the board");
            }

            match self.game.place(address) {
                Ok(placed) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: name,
                        mark: placed,
                        address,
                    })?;
                    self.event_tx
                        .send(GameEvent::StateChanged(self.game.clone()))?;
                    if !self.pace.is_zero() {
                        tokio::time::sleep(self.pace).await;
                    }
                }
                Err(GameError::AlreadyOccupied { .. }) if is_human => {
                    warn!(player = %name, %address, "Square already taken");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: name,
                        reason: "That square is filled already.".to_string(),
                    })?;
                }
                Err(e) => anyhow::bail!("{name} made an illegal move at {address}: {e}"),
            }
        }
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::O => self.player_o.as_ref(),
            Mark::X | Mark::Empty => self.player_x.as_ref(),
        }
    }

    fn player_mut(&mut self, mark: Mark) -> &mut Box<dyn Player> {
        match mark {
            Mark::O => &mut self.player_o,
            Mark::X | Mark::Empty => &mut self.player_x,
        }
    }
}
