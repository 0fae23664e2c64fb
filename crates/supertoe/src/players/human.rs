//! Human player that gets input from keyboard.

use super::Player;
use anyhow::Result;
use crossterm::event::KeyCode;
use std::sync::Arc;
use supertoe_core::{Address, GameState};
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

/// Keyboard stream shared by every human at the table.
pub type KeyInput = Arc<Mutex<mpsc::UnboundedReceiver<KeyCode>>>;

/// Human player using keyboard input.
///
/// A move is a row digit followed by a column digit. `Esc` discards a
/// half-entered move; digits outside the board are ignored.
pub struct HumanPlayer {
    name: String,
    input: KeyInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: KeyInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, game: &GameState) -> Result<Address> {
        let size = game.size();
        let mut row = None;
        let mut input = self.input.lock().await;

        while let Some(key) = input.recv().await {
            match key {
                KeyCode::Esc => row = None,
                KeyCode::Char(c) => {
                    let Some(digit) = c.to_digit(10).map(|d| d as usize) else {
                        continue;
                    };
                    if digit >= size {
                        continue;
                    }
                    match row {
                        None => row = Some(digit),
                        Some(r) => {
                            let address = Address::new(r, digit);
                            debug!(player = %self.name, %address, "Human entered move");
                            return Ok(address);
                        }
                    }
                }
                _ => {}
            }
        }

        anyhow::bail!("Input channel closed")
    }

    fn mood(&self, _game: &GameState) -> String {
        "It's your turn.".to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_human(&self) -> bool {
        true
    }
}
