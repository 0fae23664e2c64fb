//! Error types for board construction and mutation.

use crate::Mark;
use derive_more::{Display, Error};

/// Errors raised by [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The target square already carries a mark.
    #[display("Square is already occupied by {existing:?}")]
    AlreadyOccupied {
        /// Mark found on the square.
        existing: Mark,
    },

    /// A supplied board does not match the variant's dimensions.
    #[display("Board must be {expected}x{expected}, got {rows} rows with up to {columns} columns")]
    BoardShape {
        /// Required side length.
        expected: usize,
        /// Rows supplied.
        rows: usize,
        /// Widest row supplied.
        columns: usize,
    },

    /// A supplied board cannot arise from alternating play with X first.
    #[display("Invalid mark counts: X={x}, O={o} (must be equal or X ahead by 1)")]
    MarkCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}
