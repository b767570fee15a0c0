//! Tests for the heuristic computer opponent.

use noughts_core::{Board, Choice, ComputerOpponent, Player, Position, Tier, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_prefers_own_win_over_block() {
    let board: Board = "OO_ XX_ ___".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let choice = choose_move(&board, Player::O, Player::X, &mut rng);

    assert_eq!(choice, Some(Choice::new(Position::TopRight, Tier::Win)));
}

#[test]
fn test_blocks_column_threat() {
    let board: Board = "X__ X_O ___".parse().unwrap();
    let mut opponent = ComputerOpponent::seeded(3);

    let choice = opponent.choose(&board, Player::O).unwrap();

    assert_eq!(*choice.position(), Position::BottomLeft);
    assert_eq!(*choice.tier(), Tier::Block);
}

#[test]
fn test_misses_forks() {
    // X threatens nothing yet, so the heuristic plays randomly even though
    // X can fork next move. Any empty square is an acceptable answer.
    let board: Board = "X__ _O_ __X".parse().unwrap();
    let mut opponent = ComputerOpponent::seeded(11);

    let choice = opponent.choose(&board, Player::O).unwrap();

    assert_eq!(*choice.tier(), Tier::Random);
    assert!(board.is_empty(*choice.position()));
}

#[test]
fn test_random_covers_every_empty_square() {
    let board: Board = "X__ ___ __O".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = std::collections::HashSet::new();

    for _ in 0..500 {
        let choice = choose_move(&board, Player::O, Player::X, &mut rng).unwrap();
        seen.insert(*choice.position());
    }

    assert_eq!(seen.len(), board.empty_positions().len());
}
