//! Heuristic scoring for positions where the search stops early.
//!
//! Positive values favor X, negative values favor O.

use crate::{GameState, Mark, VictoryPath};

/// Scores one winning path.
///
/// A path holding both marks can never be completed and scores zero.
/// Otherwise the score is `x_count² - o_count²`, so paths closer to
/// completion weigh disproportionately more.
pub fn score_path(state: &GameState, path: &VictoryPath) -> i32 {
    let (x, o) = path
        .squares()
        .iter()
        .fold((0i32, 0i32), |(x, o), address| match state.mark_at(*address) {
            Mark::X => (x + 1, o),
            Mark::O => (x, o + 1),
            Mark::Empty => (x, o),
        });
    if x > 0 && o > 0 { 0 } else { x * x - o * o }
}

/// Scores a whole board in `[-1, 1]`.
///
/// A fully owned path returns exactly `1.0` or `-1.0`. Otherwise the path
/// scores are summed and squashed through `2 / (1 + e^-sum) - 1`, kept
/// strictly inside `(-1, 1)` so an estimate never equals a decided game.
pub fn score_game_state(state: &GameState) -> f64 {
    let full = i32::try_from(state.size() * state.size()).unwrap_or(i32::MAX);
    let mut sum = 0i32;
    for path in state.victory_paths() {
        let score = score_path(state, path);
        if score == full {
            return 1.0;
        }
        if score == -full {
            return -1.0;
        }
        sum += score;
    }
    // The squash rounds to exactly 1.0 in f64 once `sum` reaches 37.
    let squashed = 2.0 / (1.0 + (-f64::from(sum)).exp()) - 1.0;
    squashed.clamp(-1.0 + f64::EPSILON, 1.0 - f64::EPSILON)
}
