//! Move selection for the strongest automated player.
//!
//! The pieces are layered bottom-up:
//!
//! - [`evaluate`]: heuristic board score used at the depth cutoff
//! - [`MoveScore`]: ranking key with asymmetric depth tie-breaking
//! - [`opening`]: book replies for the first moves
//! - [`SearchEngine`]: negamax under an iterative-deepening [`Budget`]

mod budget;
mod engine;
pub mod evaluate;
pub mod opening;
mod score;

pub use budget::{Budget, DEFAULT_TIME_BUDGET, TieBreak};
pub use engine::{Decision, SearchEngine};
pub use evaluate::{score_game_state, score_path};
pub use score::MoveScore;
