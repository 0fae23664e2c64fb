//! Core domain types shared by every board variant.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Occupancy of a single square.
///
/// `X` always moves first. Ordering is `Empty < X < O`, which is the
/// order used when partitioning squares and when checking for a winner.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Mark {
    /// Unclaimed square.
    #[default]
    #[display(" ")]
    Empty,
    /// First player.
    #[display("X")]
    X,
    /// Second player.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opposing player's mark. `Empty` has no opponent.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }
}

/// A `(row, column)` board coordinate.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_new::new,
)]
#[display("({row}, {col})")]
pub struct Address {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

/// One way to win: a fixed group of squares that must all carry the same mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryPath {
    squares: Vec<Address>,
}

impl VictoryPath {
    /// Builds a path from its squares.
    pub fn new(squares: impl IntoIterator<Item = Address>) -> Self {
        let mut squares: Vec<Address> = squares.into_iter().collect();
        squares.sort();
        squares.dedup();
        Self { squares }
    }

    /// The squares making up this path, sorted row-major.
    pub fn squares(&self) -> &[Address] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::Empty.to_string(), " ");
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::Empty.opponent(), Mark::Empty);
    }

    #[test]
    fn test_address_display() {
        assert_eq!(Address::new(2, 3).to_string(), "(2, 3)");
    }

    #[test]
    fn test_victory_path_normalizes_order() {
        let path = VictoryPath::new([Address::new(2, 0), Address::new(0, 2), Address::new(1, 1)]);
        assert_eq!(
            path.squares(),
            &[Address::new(0, 2), Address::new(1, 1), Address::new(2, 0)]
        );
        let duplicated = VictoryPath::new([Address::new(1, 1), Address::new(1, 1)]);
        assert_eq!(duplicated.squares(), &[Address::new(1, 1)]);
    }
}
