//! Player that looks exactly one move ahead.

use super::Player;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use supertoe_core::{Address, GameState};
use tracing::{debug, instrument};

/// AI that takes a win if one is available, else blocks, else plays randomly.
pub struct PeekAheadPlayer {
    name: String,
    rng: StdRng,
}

impl PeekAheadPlayer {
    /// Creates a new peek-ahead player.
    pub fn new(name: impl Into<String>, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }

    /// Finds a square that wins now, and the first square the opponent would win on.
    #[instrument(skip_all)]
    pub fn scan(game: &GameState) -> (Option<Address>, Option<Address>) {
        let own = game.next_mark();
        let opponent = own.opponent();
        let mut winning = None;
        let mut defensive = None;
        for option in game.open_squares() {
            let mut hypothetical = game.clone();
            hypothetical.paint(option, own);
            if hypothetical.winner() == own {
                winning = Some(option);
            }
            if defensive.is_none() {
                hypothetical.paint(option, opponent);
                if hypothetical.winner() == opponent {
                    defensive = Some(option);
                }
            }
        }
        (winning, defensive)
    }
}

#[async_trait::async_trait]
impl Player for PeekAheadPlayer {
    async fn get_move(&mut self, game: &GameState) -> Result<Address> {
        let (winning, defensive) = Self::scan(game);
        let choice = winning
            .or(defensive)
            .or_else(|| game.open_squares().into_iter().choose(&mut self.rng));
        match choice {
            Some(address) => {
                debug!(ai = %self.name, %address, ?winning, ?defensive, "AI chose position");
                Ok(address)
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn mood(&self, game: &GameState) -> String {
        if game.open_squares().len() == 1 {
            format!("{} doesn't have much to think about.", self.name)
        } else {
            format!("{} considers their options.", self.name)
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
