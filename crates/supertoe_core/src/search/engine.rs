//! Depth-limited negamax with time-boxed iterative deepening.

use super::evaluate::score_game_state;
use super::opening::book_move;
use super::{Budget, MoveScore, TieBreak};
use crate::{Address, GameError, GameState, Mark};
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// The quickest possible loss: the opponent wins on their very next move.
const IMMEDIATE_LOSS: MoveScore = MoveScore::new(-1.0, 1);

/// How a move was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Taken straight from the opening book.
    Book(Address),
    /// Found by iterative deepening.
    Searched {
        /// Best move at the last completed depth.
        best_move: Address,
        /// Its score.
        score: MoveScore,
        /// Last depth level that completed.
        depth: u32,
    },
}

impl Decision {
    /// The chosen square.
    pub fn address(&self) -> Address {
        match self {
            Decision::Book(address) => *address,
            Decision::Searched { best_move, .. } => *best_move,
        }
    }
}

/// Move selection for the strongest automated player.
///
/// Hypothetical positions are independent clones of the input; the
/// caller's state is never modified.
#[derive(Debug, Clone, Default, derive_new::new)]
pub struct SearchEngine {
    budget: Budget,
    tie_break: TieBreak,
}

impl SearchEngine {
    /// The budget used by [`SearchEngine::select_move`].
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Chooses a move, or `None` if no square is open.
    pub fn select_move(&mut self, state: &GameState) -> Option<Address> {
        self.decide(state).map(|decision| decision.address())
    }

    /// Chooses a move and reports how it was found.
    #[instrument(skip(self, state), fields(variant = %state.variant(), next = %state.next_mark()))]
    pub fn decide(&mut self, state: &GameState) -> Option<Decision> {
        if let Some(address) = book_move(state, &mut self.tie_break) {
            info!(%address, "Playing book move");
            return Some(Decision::Book(address));
        }
        let budget = self.budget;
        self.search(state, budget)
    }

    /// Iterative deepening under an explicit budget, bypassing the book.
    ///
    /// Depth 0 always runs. Deeper levels start only while `budget` allows,
    /// and stop early on a forced win or once a level has already looked
    /// at every remaining ply.
    pub fn search(&mut self, state: &GameState, budget: Budget) -> Option<Decision> {
        let open = state.open_squares();
        if open.is_empty() {
            warn!("Search requested on a full board");
            return None;
        }

        let started = Instant::now();
        let mut decision = None;
        let mut depth = 0u32;
        while depth == 0 || budget.allows(started, depth) {
            let mut level_best: Option<(Address, MoveScore)> = None;
            for &option in &open {
                let score = self.score_open(state, option, depth);
                if level_best.is_none_or(|(_, best)| score > best) {
                    level_best = Some((option, score));
                }
                if score.is_win() {
                    break;
                }
            }
            let Some((best_move, score)) = level_best else {
                break;
            };
            debug!(depth, %best_move, score = score.score, plies = score.depth, "Depth complete");
            decision = Some(Decision::Searched {
                best_move,
                score,
                depth,
            });

            let exhaustive = depth as usize + 1 >= open.len();
            if score.is_win() || exhaustive {
                break;
            }
            depth += 1;
        }

        if let Some(Decision::Searched {
            best_move,
            score,
            depth,
        }) = decision
        {
            info!(
                %best_move,
                score = score.score,
                depth,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Search finished"
            );
        }
        decision
    }

    /// Scores `address` for the player about to move in `state`.
    ///
    /// `depth` is how many further replies to examine before falling back
    /// to the heuristic.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOccupied`] if `address` is taken.
    pub fn score_move(
        &mut self,
        state: &GameState,
        address: Address,
        depth: u32,
    ) -> Result<MoveScore, GameError> {
        let mut hypothetical = state.clone();
        let mover = hypothetical.place(address)?;
        Ok(self.score_position(&hypothetical, mover, depth))
    }

    fn score_open(&mut self, state: &GameState, address: Address, depth: u32) -> MoveScore {
        let mover = state.next_mark();
        let mut hypothetical = state.clone();
        hypothetical.paint(address, mover);
        self.score_position(&hypothetical, mover, depth)
    }

    /// Value of `after` for `mover`, who just played.
    fn score_position(&mut self, after: &GameState, mover: Mark, depth: u32) -> MoveScore {
        if after.winner() != Mark::Empty {
            return MoveScore::WIN;
        }

        if depth == 0 {
            let heuristic = score_game_state(after);
            let score = if mover == Mark::O { -heuristic } else { heuristic };
            return MoveScore::new(score, 0);
        }

        let replies = after.open_squares();
        if replies.is_empty() {
            return MoveScore::TIE;
        }

        // The opponent picks whichever reply is worst for the mover.
        let mut worst: Option<MoveScore> = None;
        for reply in replies {
            let score = -self.score_open(after, reply, depth - 1).bump();
            let replace = match worst {
                None => true,
                Some(current) => {
                    score < current || (score == current && self.tie_break.take_challenger())
                }
            };
            if replace {
                worst = Some(score);
            }
            // Only the quickest loss stops early; a slower -1 may still be beaten
            // by a faster one, and the reported depth must be the real one.
            if worst == Some(IMMEDIATE_LOSS) {
                break;
            }
        }
        worst.unwrap_or(MoveScore::TIE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;

    fn engine(depth: u32) -> SearchEngine {
        SearchEngine::new(Budget::Depth(depth), TieBreak::KeepFirst)
    }

    #[test]
    fn test_full_board_has_no_move() {
        use Mark::{O, X};
        let rows = [[X, O, X], [X, O, O], [O, X, X]];
        let state = GameState::from_rows(Variant::Classic, &rows).unwrap();
        assert_eq!(engine(3).select_move(&state), None);
    }

    #[test]
    fn test_score_move_rejects_taken_square() {
        let mut state = GameState::new(Variant::Classic);
        state.place(Address::new(0, 0)).unwrap();
        assert!(engine(1).score_move(&state, Address::new(0, 0), 1).is_err());
    }

    #[test]
    fn test_search_does_not_touch_input() {
        let mut state = GameState::new(Variant::Classic);
        state.place(Address::new(1, 1)).unwrap();
        state.place(Address::new(0, 0)).unwrap();
        let before = state.clone();
        engine(2).search(&state, Budget::Depth(2));
        assert_eq!(state, before);
    }

    #[test]
    fn test_forced_loss_reports_its_true_depth() {
        use Mark::{Empty as E, O, X};
        // O must block (0, 2); X then forks with (1, 1) and wins two plies later.
        let rows = [[X, X, E], [O, E, E], [E, E, E]];
        let state = GameState::from_rows(Variant::Classic, &rows).unwrap();
        for depth in [3, 4, 6] {
            let score = engine(depth)
                .score_move(&state, Address::new(0, 2), depth)
                .unwrap();
            assert_eq!(score, MoveScore::new(-1.0, 3), "depth {depth}");
            assert_eq!(score.depth, 3);
        }
    }

    #[test]
    fn test_zero_time_still_completes_depth_zero() {
        let mut state = GameState::new(Variant::Classic);
        state.place(Address::new(1, 1)).unwrap();
        state.place(Address::new(0, 0)).unwrap();
        let decision = engine(0).search(&state, Budget::Time(std::time::Duration::ZERO));
        assert!(matches!(decision, Some(Decision::Searched { depth: 0, .. })));
    }
}
