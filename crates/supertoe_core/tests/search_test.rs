//! Tests for move scoring and move selection.

use supertoe_core::{
    Address, Budget, Decision, GameState, Mark, MoveScore, SearchEngine, TieBreak, Variant,
};

const X: Mark = Mark::X;
const Q: Mark = Mark::O;
const E: Mark = Mark::Empty;

fn engine(depth: u32) -> SearchEngine {
    SearchEngine::new(Budget::Depth(depth), TieBreak::KeepFirst)
}

fn supergame(rows: [[Mark; 4]; 4]) -> GameState {
    GameState::from_rows(Variant::Super, &rows).unwrap()
}

fn classic(rows: [[Mark; 3]; 3]) -> GameState {
    GameState::from_rows(Variant::Classic, &rows).unwrap()
}

fn score(state: &GameState, row: usize, col: usize, depth: u32) -> MoveScore {
    engine(depth)
        .score_move(state, Address::new(row, col), depth)
        .unwrap()
}

#[test]
fn test_score_winning_move() {
    let game = supergame([[X, X, X, E], [Q, Q, Q, E], [E; 4], [E; 4]]);
    assert_eq!(score(&game, 0, 3, 1), MoveScore::WIN);
}

#[test]
fn test_immediate_win_scores_one_at_any_depth() {
    let game = supergame([[X, X, X, E], [Q, Q, Q, E], [E; 4], [E; 4]]);
    for depth in 0..4 {
        assert_eq!(score(&game, 0, 3, depth).score, 1.0);
    }
}

#[test]
fn test_score_miss_block() {
    let game = supergame([[X, X, X, E], [Q, Q, Q, E], [E; 4], [E; 4]]);
    assert_eq!(score(&game, 2, 3, 1).score, -1.0);
}

#[test]
fn test_score_miss_block_o() {
    let game = supergame([[E; 4], [X, X, X, E], [E, Q, Q, E], [E; 4]]);
    assert_eq!(score(&game, 2, 0, 1).score, -1.0);
}

#[test]
fn test_score_force_tie() {
    let game = supergame([
        [E, Q, E, X],
        [X, X, Q, X],
        [Q, X, E, Q],
        [Q, E, X, E],
    ]);
    assert_eq!(score(&game, 2, 2, 5).score, 0.0);
}

#[test]
fn test_score_bad_second_move() {
    let game = supergame([[E; 4], [E, X, X, E], [E, Q, E, E], [E; 4]]);
    assert_eq!(score(&game, 0, 0, 5).score, -1.0);
    assert_eq!(score(&game, 2, 2, 5).score, -1.0);
}

#[test]
fn test_score_good_second_move() {
    let game = supergame([[E; 4], [E, X, X, E], [E, Q, E, E], [E; 4]]);
    assert!(score(&game, 1, 3, 5).score > -1.0);
}

#[test]
fn test_score_long_loss_over_short_loss() {
    let game = supergame([[X, X, E, E], [E, X, E, E], [E; 4], [Q, Q, E, E]]);
    let blocking = score(&game, 1, 0, 3);
    let ignoring = score(&game, 3, 3, 3);
    assert_eq!(ignoring, MoveScore::new(-1.0, 1));
    assert!(blocking > ignoring);
}

#[test]
fn test_pick_second_move() {
    let cases = [
        ([X, X, Q, E], Address::new(1, 3)),
        ([X, X, E, Q], Address::new(1, 0)),
        ([Q, E, X, X], Address::new(2, 3)),
        ([E, Q, X, X], Address::new(2, 0)),
    ];
    for (center, expected) in cases {
        let game = supergame([
            [E; 4],
            [E, center[0], center[1], E],
            [E, center[2], center[3], E],
            [E; 4],
        ]);
        let mut engine = engine(1);
        assert_eq!(engine.decide(&game), Some(Decision::Book(expected)));
    }
}

#[test]
fn test_takes_immediate_win() {
    let game = classic([[X, X, E], [Q, Q, E], [E; 3]]);
    let decision = engine(4).decide(&game);
    assert!(matches!(
        decision,
        Some(Decision::Searched { best_move, depth: 0, .. }) if best_move == Address::new(0, 2)
    ));
}

#[test]
fn test_blocks_even_when_lost() {
    // X threatens (0, 2) and will have a fork next turn whatever O does;
    // blocking still delays the loss the longest.
    let game = classic([[X, X, E], [Q, E, E], [E; 3]]);
    for depth in [1, 2, 6] {
        assert_eq!(
            engine(depth).select_move(&game),
            Some(Address::new(0, 2)),
            "depth {depth}"
        );
    }
}

#[test]
fn test_lopsided_estimate_does_not_end_deepening() {
    // X's cutoff estimate after (2, 2) saturates, yet no move wins outright.
    let game = supergame([[X, Q, Q, E], [E, X, E, E], [E, X, E, Q], [X, E, Q, E]]);
    let estimate = score(&game, 2, 2, 0);
    assert!(estimate.score < 1.0 && !estimate.is_win(), "{estimate:?}");

    let decision = engine(4).search(&game, Budget::Depth(4));
    assert!(
        matches!(decision, Some(Decision::Searched { depth, .. }) if depth >= 1),
        "{decision:?}"
    );
}

#[test]
fn test_short_win_preferred_over_long_win() {
    // (2, 0) wins on the spot; (2, 2) forks and wins two plies later.
    let game = classic([[X, X, Q], [X, E, Q], [E, Q, E]]);
    assert_eq!(score(&game, 2, 0, 2), MoveScore::new(1.0, 0));
    assert_eq!(score(&game, 2, 2, 2), MoveScore::new(1.0, 2));
    assert!(score(&game, 2, 0, 2) > score(&game, 2, 2, 2));

    let decision = engine(2).search(&game, Budget::Depth(2));
    let Some(Decision::Searched { best_move, score, .. }) = decision else {
        panic!("expected a searched move, got {decision:?}");
    };
    assert_eq!(best_move, Address::new(2, 0));
    assert_eq!(score.depth, 0);
}

#[test]
fn test_search_returns_open_square_in_random_mode() {
    let game = classic([[X, E, E], [E, Q, E], [E, E, E]]);
    let mut engine = SearchEngine::new(Budget::Depth(3), TieBreak::seeded(42));
    let chosen = engine.select_move(&game).unwrap();
    assert_eq!(game.mark_at(chosen), Mark::Empty);
}

#[test]
fn test_perfect_play_draws_classic() {
    let mut game = GameState::new(Variant::Classic);
    let mut x = SearchEngine::new(Budget::Depth(8), TieBreak::seeded(1));
    let mut o = SearchEngine::new(Budget::Depth(8), TieBreak::seeded(2));
    while !game.is_over() {
        let engine = if game.next_mark() == Mark::X { &mut x } else { &mut o };
        let address = engine.select_move(&game).unwrap();
        game.place(address).unwrap();
    }
    assert_eq!(game.winner(), Mark::Empty, "\n{game}");
}
