//! Tests for board state, turn order and winner detection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use supertoe_core::{Address, GameError, GameState, GameStatus, Mark, Variant};

const X: Mark = Mark::X;
const O: Mark = Mark::O;
const E: Mark = Mark::Empty;

/// Plays random legal moves until the game ends, checking invariants after each one.
fn random_playout(variant: Variant, seed: u64) -> Vec<GameState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = GameState::new(variant);
    let mut history = vec![state.clone()];
    while !state.is_over() {
        let Some(address) = state.open_squares().into_iter().choose(&mut rng) else {
            break;
        };
        state.place(address).unwrap();
        history.push(state.clone());
    }
    history
}

#[test]
fn test_next_mark_empty_iff_board_full() {
    for seed in 0..50 {
        for variant in [Variant::Classic, Variant::Super] {
            for state in random_playout(variant, seed) {
                assert_eq!(
                    state.next_mark() == Mark::Empty,
                    state.open_squares().is_empty(),
                    "seed {seed}:\n{state}"
                );
            }
        }
    }
}

#[test]
fn test_mark_balance_holds_through_play() {
    for seed in 0..50 {
        for state in random_playout(Variant::Super, seed) {
            let x = state.count(Mark::X);
            let o = state.count(Mark::O);
            assert!(x == o || x == o + 1, "seed {seed}: x={x} o={o}");
        }
    }
}

#[test]
fn test_winner_owns_a_complete_path() {
    for seed in 0..50 {
        for variant in [Variant::Classic, Variant::Super] {
            for state in random_playout(variant, seed) {
                let winner = state.winner();
                if winner == Mark::Empty {
                    continue;
                }
                let owned = &state.squares_by_mark()[&winner];
                assert!(
                    state
                        .victory_paths()
                        .iter()
                        .any(|path| path.squares().iter().all(|a| owned.contains(a))),
                    "seed {seed}: {winner:?} reported without a path\n{state}"
                );
            }
        }
    }
}

#[test]
fn test_every_path_wins_for_either_mark() {
    for variant in [Variant::Classic, Variant::Super] {
        for path in variant.victory_paths() {
            for mark in [Mark::X, Mark::O] {
                let mut state = GameState::new(variant);
                for address in path.squares() {
                    state.paint(*address, mark);
                }
                assert_eq!(state.winner(), mark, "{variant} path {path:?}");
            }
        }
    }
}

#[test]
fn test_super_classic_paths_differ() {
    // Four corners win Super but the analogous shape does not win Classic.
    let mut classic = GameState::new(Variant::Classic);
    for (r, c) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
        classic.paint(Address::new(r, c), Mark::X);
    }
    assert_eq!(classic.winner(), Mark::Empty);

    let mut sup = GameState::new(Variant::Super);
    for (r, c) in [(0, 0), (0, 3), (3, 0), (3, 3)] {
        sup.paint(Address::new(r, c), Mark::X);
    }
    assert_eq!(sup.winner(), Mark::X);
}

#[test]
fn test_super_top_row_wins() {
    let mut state = GameState::new(Variant::Super);
    for col in 0..4 {
        state.paint(Address::new(0, col), Mark::X);
    }
    assert_eq!(state.winner(), Mark::X);
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
}

#[test]
fn test_x_checked_before_o() {
    let mut state = GameState::new(Variant::Classic);
    for col in 0..3 {
        state.paint(Address::new(0, col), Mark::O);
        state.paint(Address::new(2, col), Mark::X);
    }
    assert_eq!(state.winner(), Mark::X);
}

#[test]
fn test_checkerboard_blocks_has_no_winner() {
    let rows = [[X, X, O, O], [O, O, X, X], [X, X, O, O], [O, O, X, X]];
    let state = GameState::from_rows(Variant::Super, &rows).unwrap();
    assert_eq!(state.winner(), Mark::Empty);
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_place_touches_only_target() {
    let mut state = GameState::new(Variant::Super);
    state.place(Address::new(1, 1)).unwrap();
    let before = state.clone();
    state.place(Address::new(2, 3)).unwrap();

    assert_eq!(state.get(2, 3), Mark::O);
    for address in state.addresses() {
        if address != Address::new(2, 3) {
            assert_eq!(state.mark_at(address), before.mark_at(address));
        }
    }
}

#[test]
fn test_place_mark_uses_given_mark() {
    let mut state = GameState::new(Variant::Classic);
    state.place_mark(Address::new(2, 2), Mark::O).unwrap();
    assert_eq!(state.get(2, 2), Mark::O);
    assert_eq!(
        state.place_mark(Address::new(2, 2), Mark::X),
        Err(GameError::AlreadyOccupied { existing: Mark::O })
    );
}

#[test]
fn test_squares_by_mark_partitions_board() {
    let rows = [[X, E, E], [E, O, E], [E, E, X]];
    let state = GameState::from_rows(Variant::Classic, &rows).unwrap();
    let by_mark = state.squares_by_mark();

    assert_eq!(by_mark.len(), 3);
    assert_eq!(by_mark[&Mark::X].len(), 2);
    assert_eq!(by_mark[&Mark::O].len(), 1);
    assert_eq!(by_mark[&Mark::Empty], state.open_squares());
    assert_eq!(by_mark.values().map(|s| s.len()).sum::<usize>(), 9);
}

#[test]
fn test_clone_is_independent() {
    let original = GameState::new(Variant::Classic);
    let mut copy = original.clone();
    copy.place(Address::new(0, 0)).unwrap();
    assert_eq!(original.get(0, 0), Mark::Empty);
}

#[test]
fn test_already_occupied_message() {
    let err = GameError::AlreadyOccupied { existing: Mark::X };
    assert!(err.to_string().contains("occupied"));
}
