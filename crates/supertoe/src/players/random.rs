//! Player that picks any open square.

use super::Player;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use supertoe_core::{Address, GameState};
use tracing::debug;

/// AI that picks a uniformly random open square.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a new random player.
    pub fn new(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn get_move(&mut self, game: &GameState) -> Result<Address> {
        let choice = game.open_squares().into_iter().choose(&mut self.rng);
        match choice {
            Some(address) => {
                debug!(ai = %self.name, %address, "AI chose position");
                Ok(address)
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn mood(&self, _game: &GameState) -> String {
        format!("{} is feeling impulsive.", self.name)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
