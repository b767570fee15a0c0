//! Tests for the game session state machine.

use noughts_core::{
    Board, GameMode, GameSession, IgnoreReason, MoveReport, Outcome, Phase, Player, Position,
    evaluate_outcome,
};

fn started(mode: GameMode) -> GameSession {
    let mut session = GameSession::new(mode);
    session.reset();
    session
}

#[test]
fn test_top_row_win() {
    let mut session = started(GameMode::HumanVsHuman);

    let mut last = None;
    for index in [0, 4, 1, 7, 2] {
        last = Some(session.apply_move(index));
    }

    let line = [Position::TopLeft, Position::TopCenter, Position::TopRight];
    assert_eq!(
        last,
        Some(MoveReport::Applied {
            player: Player::X,
            position: Position::TopRight,
            outcome: Outcome::Won {
                player: Player::X,
                line,
            },
        })
    );
    assert_eq!(
        session.phase(),
        Phase::Won {
            winner: Player::X,
            line
        }
    );
    assert!(!session.is_active());
    assert_eq!(session.status_text(), "X wins!");
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX OXO OXO".parse().unwrap();
    assert_eq!(evaluate_outcome(&board), Outcome::Draw);
}

#[test]
fn test_draw_through_play() {
    let mut session = started(GameMode::HumanVsHuman);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        assert!(session.apply_move(index).is_applied());
    }
    assert_eq!(session.phase(), Phase::Draw);
    assert_eq!(session.status_text(), "It's a draw!");
}

#[test]
fn test_mode_switch_mid_game_resets() {
    let mut session = started(GameMode::HumanVsHuman);
    session.apply_move(0);
    session.apply_move(4);

    session.set_mode(GameMode::HumanVsComputer);

    assert_eq!(session.board(), &Board::new());
    assert_eq!(session.current_player(), Player::X);
    assert!(session.is_active());
    assert_eq!(session.mode(), GameMode::HumanVsComputer);
}

#[test]
fn test_selecting_same_mode_still_resets() {
    let mut session = started(GameMode::HumanVsHuman);
    session.apply_move(3);
    let epoch = session.epoch();

    session.set_mode(GameMode::HumanVsHuman);

    assert!(session.history().is_empty());
    assert!(session.epoch() > epoch);
}

#[test]
fn test_occupied_square_is_noop() {
    let mut session = started(GameMode::HumanVsHuman);
    session.apply_move(4);
    let before = session.clone();

    let report = session.apply_move(4);

    assert_eq!(
        report,
        MoveReport::Ignored(IgnoreReason::Occupied(Position::Center))
    );
    assert_eq!(session, before);
}

#[test]
fn test_finished_game_is_noop() {
    let mut session = started(GameMode::HumanVsHuman);
    for index in [0, 4, 1, 7, 2] {
        session.apply_move(index);
    }
    let before = session.clone();

    assert_eq!(
        session.apply_move(8),
        MoveReport::Ignored(IgnoreReason::Inactive)
    );
    assert_eq!(session, before);
}

#[test]
fn test_reset_after_win_starts_over() {
    let mut session = started(GameMode::HumanVsHuman);
    for index in [0, 4, 1, 7, 2] {
        session.apply_move(index);
    }

    session.reset();

    assert_eq!(session.phase(), Phase::InProgress);
    assert_eq!(session.current_player(), Player::X);
    assert!(session.apply_move(2).is_applied());
}
