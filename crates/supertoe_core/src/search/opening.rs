//! Hard-coded replies for the first moves of a game.
//!
//! Early positions branch too widely for the search to finish in time, and
//! their best replies are known.

use super::TieBreak;
use crate::{Address, GameState, Mark, Variant};
use std::collections::BTreeSet;

/// True while at most one square is taken.
pub fn is_first_move(state: &GameState) -> bool {
    let cells = state.size() * state.size();
    state.open_squares().len() + 1 >= cells
}

/// True when two or three squares are taken.
pub fn is_second_move(state: &GameState) -> bool {
    let cells = state.size() * state.size();
    let open = state.open_squares().len();
    open + 3 >= cells && open + 1 < cells
}

/// Book reply for the current position, if there is one.
pub fn book_move(state: &GameState, tie_break: &mut TieBreak) -> Option<Address> {
    let reply = match state.variant() {
        Variant::Classic if is_first_move(state) => first_move_classic(state, tie_break),
        Variant::Super if is_first_move(state) => Some(first_move_super(state)),
        Variant::Super if is_second_move(state) => second_move_super(state),
        _ => None,
    };
    reply.filter(|address| state.mark_at(*address) == Mark::Empty)
}

/// Center if it is free, otherwise any corner.
fn first_move_classic(state: &GameState, tie_break: &mut TieBreak) -> Option<Address> {
    let last = state.size() - 1;
    let center = Address::new(last / 2, last / 2);
    if state.mark_at(center) == Mark::Empty {
        return Some(center);
    }
    let corners = [
        Address::new(0, 0),
        Address::new(0, last),
        Address::new(last, 0),
        Address::new(last, last),
    ];
    tie_break.pick(&corners).copied()
}

/// Claims one of the four central squares.
///
/// On an empty board that is `(1, 1)`. A reply to a central mark reflects
/// it top-to-bottom; a reply to an outer mark takes the nearest central
/// square.
fn first_move_super(state: &GameState) -> Address {
    let size = state.size();
    let taken = state
        .addresses()
        .find(|address| state.mark_at(*address) != Mark::Empty);
    match taken {
        None => Address::new(1, 1),
        Some(Address { row, col }) if (1..=2).contains(&row) && (1..=2).contains(&col) => {
            Address::new(size - row - 1, col)
        }
        Some(Address { row, col }) => {
            Address::new(1 + usize::from(row > 1), 1 + usize::from(col > 1))
        }
    }
}

/// Known replies once X has opened in the middle of the board.
fn second_move_super(state: &GameState) -> Option<Address> {
    let by_mark = state.squares_by_mark();
    let xs = by_mark.get(&Mark::X).cloned().unwrap_or_default();
    let os = by_mark.get(&Mark::O).cloned().unwrap_or_default();
    let set = |squares: &[(usize, usize)]| -> BTreeSet<Address> {
        squares.iter().map(|&(r, c)| Address::new(r, c)).collect()
    };

    match state.next_mark() {
        Mark::O if xs == set(&[(1, 1), (1, 2)]) => {
            if os == set(&[(2, 1)]) {
                Some(Address::new(1, 3))
            } else {
                Some(Address::new(1, 0))
            }
        }
        Mark::O if xs == set(&[(2, 1), (2, 2)]) => {
            if os == set(&[(1, 1)]) {
                Some(Address::new(2, 3))
            } else {
                Some(Address::new(2, 0))
            }
        }
        Mark::X if xs == set(&[(1, 1)]) => {
            if os == set(&[(2, 2)]) {
                Some(Address::new(1, 0))
            } else if os.contains(&Address::new(1, 2)) {
                Some(Address::new(2, 1))
            } else {
                Some(Address::new(1, 2))
            }
        }
        _ => None,
    }
}
