//! Player trait and implementations.

mod flawless;
mod human;
mod peek_ahead;
mod random;

pub use flawless::FlawlessPlayer;
pub use human::{HumanPlayer, KeyInput};
pub use peek_ahead::PeekAheadPlayer;
pub use random::RandomPlayer;

use crate::config::{PlayConfig, PlayerKind};
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use supertoe_core::{Address, GameState, Mark};
use tracing::instrument;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Automated players only ever return open squares.
    async fn get_move(&mut self, game: &GameState) -> Result<Address>;

    /// Short description of what the player is up to.
    fn mood(&self, game: &GameState) -> String;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True for players whose illegal moves should be re-prompted.
    fn is_human(&self) -> bool {
        false
    }
}

/// Random source for `mark`'s player, seeded from config when a seed is set.
#[instrument(skip(config))]
pub fn rng_for(config: &PlayConfig, mark: Mark) -> StdRng {
    match config.seed_for(mark) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Builds the configured player for `mark`.
///
/// Human players need `keys`; requesting one without it is an error.
#[instrument(skip(config, keys))]
pub fn build(config: &PlayConfig, mark: Mark, keys: Option<&KeyInput>) -> Result<Box<dyn Player>> {
    let kind = config.players().for_mark(mark);
    let name = kind.title();
    let player: Box<dyn Player> = match kind {
        PlayerKind::Human => {
            let keys = keys.ok_or_else(|| anyhow::anyhow!("{name} needs keyboard input"))?;
            Box::new(HumanPlayer::new(name, keys.clone()))
        }
        PlayerKind::Random => Box::new(RandomPlayer::new(name, rng_for(config, mark))),
        PlayerKind::PeekAhead => Box::new(PeekAheadPlayer::new(name, rng_for(config, mark))),
        PlayerKind::Flawless => Box::new(FlawlessPlayer::new(name, config.search_engine(mark))),
    };
    Ok(player)
}
