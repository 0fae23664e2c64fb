//! Supertoe core - tic-tac-toe boards and the search that plays them
//!
//! Two variants share one board type:
//!
//! - **Classic**: 3x3, three in a row, column or diagonal
//! - **Super**: 4x4, four in a row, column or diagonal, any 2x2 block,
//!   or all four corners
//!
//! Turn order is derived from the board rather than stored, and the
//! [`SearchEngine`] picks moves with a time-boxed negamax search.
//!
//! # Example
//!
//! ```
//! use supertoe_core::{Address, Budget, GameState, Mark, SearchEngine, TieBreak, Variant};
//!
//! let mut game = GameState::new(Variant::Classic);
//! game.place(Address::new(0, 0)).unwrap();
//! assert_eq!(game.next_mark(), Mark::O);
//!
//! let mut engine = SearchEngine::new(Budget::Depth(2), TieBreak::KeepFirst);
//! let reply = engine.select_move(&game).unwrap();
//! assert_eq!(game.mark_at(reply), Mark::Empty);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod search;
mod state;
mod types;
mod variant;

pub use error::GameError;
pub use search::{Budget, Decision, MoveScore, SearchEngine, TieBreak};
pub use state::{GameState, GameStatus};
pub use types::{Address, Mark, VictoryPath};
pub use variant::{CLASSIC_SIZE, SUPER_SIZE, Variant};
