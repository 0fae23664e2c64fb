//! Player backed by the adversarial search engine.

use super::Player;
use anyhow::Result;
use std::sync::{Arc, Mutex};
use supertoe_core::search::opening;
use supertoe_core::{Address, GameState, SearchEngine};
use tracing::{info, instrument};

/// AI that searches as deep as its time budget allows.
pub struct FlawlessPlayer {
    name: String,
    engine: Arc<Mutex<SearchEngine>>,
}

impl FlawlessPlayer {
    /// Creates a new flawless player around `engine`.
    pub fn new(name: impl Into<String>, engine: SearchEngine) -> Self {
        Self {
            name: name.into(),
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

#[async_trait::async_trait]
impl Player for FlawlessPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name))]
    async fn get_move(&mut self, game: &GameState) -> Result<Address> {
        let engine = Arc::clone(&self.engine);
        let state = game.clone();
        // Searching is CPU-bound; keep it off the async workers.
        let decision = tokio::task::spawn_blocking(move || {
            let mut engine = engine
                .lock()
                .map_err(|_| anyhow::anyhow!("Search engine lock poisoned"))?;
            Ok::<_, anyhow::Error>(engine.decide(&state))
        })
        .await??;

        match decision {
            Some(decision) => {
                info!(?decision, "AI chose position");
                Ok(decision.address())
            }
            None => anyhow::bail!("No valid moves available"),
        }
    }

    fn mood(&self, game: &GameState) -> String {
        if opening::is_first_move(game) {
            format!("{} doesn't need to think about their first move.", self.name)
        } else {
            format!(
                "{} considers all possible outcomes before making their move.",
                self.name
            )
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
