//! Board state with derived turn order and winner detection.

use crate::{Address, GameError, Mark, Variant, VictoryPath};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// A player completed a winning path.
    Won(Mark),
    /// The board is full with no winner.
    Draw,
}

/// A square grid of marks for one [`Variant`].
///
/// Whose turn it is is never stored: it is recomputed from the board on
/// every call to [`GameState::next_mark`]. Cloning produces an
/// independent board, which is how hypothetical positions are built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    variant: Variant,
    squares: Vec<Mark>,
}

impl GameState {
    /// Creates an empty board.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        let size = variant.size();
        Self {
            variant,
            squares: vec![Mark::Empty; size * size],
        }
    }

    /// Creates a state from rows of marks.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::BoardShape`] if the rows are not `size`x`size`
    /// and [`GameError::MarkCounts`] if X does not lead O by zero or one.
    #[instrument(skip(rows))]
    pub fn from_rows<R>(variant: Variant, rows: &[R]) -> Result<Self, GameError>
    where
        R: AsRef<[Mark]>,
    {
        let size = variant.size();
        let columns = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        if rows.len() != size || rows.iter().any(|r| r.as_ref().len() != size) {
            warn!(rows = rows.len(), columns, "Rejected board with wrong shape");
            return Err(GameError::BoardShape {
                expected: size,
                rows: rows.len(),
                columns,
            });
        }

        let squares: Vec<Mark> = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        let x = squares.iter().filter(|m| **m == Mark::X).count();
        let o = squares.iter().filter(|m| **m == Mark::O).count();
        if x != o && x != o + 1 {
            warn!(x, o, "Rejected board with unbalanced marks");
            return Err(GameError::MarkCounts { x, o });
        }

        debug!(x, o, "Board loaded");
        Ok(Self { variant, squares })
    }

    /// The variant this board belongs to.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.variant.size()
    }

    /// Winning paths for this board's variant.
    pub fn victory_paths(&self) -> &'static [VictoryPath] {
        self.variant.victory_paths()
    }

    /// Mark at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn get(&self, row: usize, col: usize) -> Mark {
        self.squares[self.index(row, col)]
    }

    /// Mark at `address`.
    ///
    /// # Panics
    ///
    /// Panics if the address is outside the board.
    pub fn mark_at(&self, address: Address) -> Mark {
        self.get(address.row, address.col)
    }

    /// True when `address` lies on the board.
    pub fn contains(&self, address: Address) -> bool {
        address.row < self.size() && address.col < self.size()
    }

    /// Every address on the board, row-major.
    pub fn addresses(&self) -> impl Iterator<Item = Address> + use<> {
        let size = self.size();
        (0..size).flat_map(move |row| (0..size).map(move |col| Address::new(row, col)))
    }

    /// All unclaimed squares.
    pub fn open_squares(&self) -> BTreeSet<Address> {
        self.addresses()
            .filter(|a| self.mark_at(*a) == Mark::Empty)
            .collect()
    }

    /// Partitions every address by its current occupant.
    ///
    /// All three marks are always present as keys.
    pub fn squares_by_mark(&self) -> BTreeMap<Mark, BTreeSet<Address>> {
        let mut by_mark: BTreeMap<Mark, BTreeSet<Address>> =
            Mark::iter().map(|m| (m, BTreeSet::new())).collect();
        for address in self.addresses() {
            by_mark
                .entry(self.mark_at(address))
                .or_default()
                .insert(address);
        }
        by_mark
    }

    /// Number of squares carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares.iter().filter(|m| **m == mark).count()
    }

    /// The mark that moves next.
    ///
    /// `Empty` once the board is full, `O` when X is ahead, otherwise `X`.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::Empty) == 0 {
            Mark::Empty
        } else if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Places the next mark at `address`, returning the mark placed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOccupied`] if the square is taken.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn place(&mut self, address: Address) -> Result<Mark, GameError> {
        let mark = self.next_mark();
        self.place_mark(address, mark)?;
        Ok(mark)
    }

    /// Places an explicit `mark` at `address` without consulting turn order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadyOccupied`] if the square is taken.
    pub fn place_mark(&mut self, address: Address, mark: Mark) -> Result<(), GameError> {
        let existing = self.mark_at(address);
        if existing != Mark::Empty {
            return Err(GameError::AlreadyOccupied { existing });
        }
        self.paint(address, mark);
        Ok(())
    }

    /// Overwrites `address` with `mark` even if the square is taken.
    ///
    /// Only for trusted callers probing hypothetical positions; this can
    /// break the X/O balance that turn order relies on.
    pub fn paint(&mut self, address: Address, mark: Mark) {
        let idx = self.index(address.row, address.col);
        self.squares[idx] = mark;
    }

    /// The winner, or `Empty` if no path is complete.
    ///
    /// X is checked before O, so a contrived board with two completed
    /// paths of different marks reports X.
    pub fn winner(&self) -> Mark {
        [Mark::X, Mark::O]
            .into_iter()
            .find(|mark| {
                self.victory_paths()
                    .iter()
                    .any(|path| path.squares().iter().all(|a| self.mark_at(*a) == *mark))
            })
            .unwrap_or(Mark::Empty)
    }

    /// Win, draw, or still playing.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Mark::Empty if self.next_mark() == Mark::Empty => GameStatus::Draw,
            Mark::Empty => GameStatus::InProgress,
            mark => GameStatus::Won(mark),
        }
    }

    /// True once the game has a winner or no squares remain.
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Board contents as rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.squares.chunks(self.size())
    }

    fn index(&self, row: usize, col: usize) -> usize {
        let size = self.size();
        assert!(row < size && col < size, "({row}, {col}) is off a {size}x{size} board");
        row * size + col
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = vec!["-"; self.size()].join("+");
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = row.iter().map(|m| m.to_string()).collect();
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}
