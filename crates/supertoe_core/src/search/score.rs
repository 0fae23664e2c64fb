//! Ranking key for candidate moves.

use std::cmp::Ordering;
use std::ops::Neg;

/// Value of a move together with how many plies below the decision it was found.
///
/// `score` is `1.0` for a forced win, `-1.0` for a forced loss, `0.0` for a
/// forced draw, and strictly between those for heuristic estimates.
///
/// Ordering is by score first. Equal scores break on depth in opposite
/// directions: a losing score ranks higher the deeper the loss (put it off),
/// anything else ranks higher the shallower it is (take it now).
#[derive(Debug, Clone, Copy)]
pub struct MoveScore {
    /// Outcome value from the mover's point of view.
    pub score: f64,
    /// Plies between the decision and the outcome.
    pub depth: u32,
}

impl MoveScore {
    /// Highest possible score: a win on the spot.
    pub const WIN: MoveScore = MoveScore::new(1.0, 0);

    /// A draw with no moves left.
    pub const TIE: MoveScore = MoveScore::new(0.0, 0);

    /// Creates a score.
    pub const fn new(score: f64, depth: u32) -> Self {
        Self { score, depth }
    }

    /// Same score one ply further from the decision.
    pub fn bump(self) -> Self {
        Self::new(self.score, self.depth + 1)
    }

    /// True for a forced win.
    pub fn is_win(&self) -> bool {
        self.score == 1.0
    }

    fn depth_key(&self) -> i64 {
        if self.score < 0.0 {
            i64::from(self.depth)
        } else {
            -i64::from(self.depth)
        }
    }
}

impl Neg for MoveScore {
    type Output = MoveScore;

    fn neg(self) -> Self::Output {
        MoveScore::new(-self.score, self.depth)
    }
}

impl PartialEq for MoveScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MoveScore {}

impl PartialOrd for MoveScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MoveScore {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores are never NaN; `-0.0` and `0.0` compare equal here.
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.depth_key().cmp(&other.depth_key()))
    }
}
