//! Exhaustive checks over every board reachable in legal play.

use noughts_core::{
    Board, GameMode, GameSession, Outcome, Player, Square, choose_move, evaluate_outcome,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn has_complete_line(board: &Board) -> bool {
    let squares = board.squares();
    LINES.iter().any(|&[a, b, c]| {
        squares[a] != Square::Empty && squares[a] == squares[b] && squares[a] == squares[c]
    })
}

fn collect(session: &GameSession, seen: &mut HashSet<Board>, sessions: &mut Vec<GameSession>) {
    if !seen.insert(session.board().clone()) {
        return;
    }
    sessions.push(session.clone());
    if !session.is_active() {
        return;
    }
    for position in session.board().empty_positions() {
        let mut next = session.clone();
        assert!(next.apply_move(position.index()).is_applied());
        collect(&next, seen, sessions);
    }
}

fn reachable() -> Vec<GameSession> {
    let mut session = GameSession::new(GameMode::HumanVsHuman);
    session.reset();
    let mut seen = HashSet::new();
    let mut sessions = Vec::new();
    collect(&session, &mut seen, &mut sessions);
    sessions
}

#[test]
fn test_reachable_board_count() {
    assert_eq!(reachable().len(), 5478);
}

#[test]
fn test_outcome_matches_line_oracle() {
    for session in reachable() {
        let board = session.board();
        let outcome = evaluate_outcome(board);
        let won = has_complete_line(board);

        assert_eq!(matches!(outcome, Outcome::Won { .. }), won, "{}", board.display());
        assert_eq!(
            outcome == Outcome::Draw,
            board.is_full() && !won,
            "{}",
            board.display()
        );
        assert_eq!(session.is_active(), !outcome.is_terminal());
        assert_eq!(
            session.history().len(),
            9 - board.empty_positions().len(),
            "{}",
            board.display()
        );
    }
}

#[test]
fn test_winning_line_belongs_to_winner() {
    for session in reachable() {
        if let Outcome::Won { player, line } = evaluate_outcome(session.board()) {
            for position in line {
                assert_eq!(session.board().get(position), Square::Occupied(player));
            }
        }
    }
}

#[test]
fn test_choose_move_always_finds_empty_square() {
    let mut rng = StdRng::seed_from_u64(2024);
    for session in reachable() {
        let board = session.board();
        for computer in [Player::X, Player::O] {
            let choice = choose_move(board, computer, computer.opponent(), &mut rng);
            match choice {
                Some(choice) => assert!(board.is_empty(*choice.position())),
                None => assert!(board.is_full()),
            }
        }
    }
}

#[test]
fn test_moves_on_finished_boards_change_nothing() {
    for session in reachable().into_iter().filter(|s| !s.is_active()) {
        for index in 0..9 {
            let mut after = session.clone();
            assert!(!after.apply_move(index).is_applied());
            assert_eq!(after, session);
        }
    }
}
