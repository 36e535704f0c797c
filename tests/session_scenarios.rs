use gomoku::{Cell, GameSession, MoveError, MoveOutcome, Player, Pos};

fn run(cells: &[(usize, usize)]) -> [Pos; 5] {
    let mut out = [Pos::new(0, 0); 5];
    for (slot, &(x, y)) in out.iter_mut().zip(cells) {
        *slot = Pos::new(x, y);
    }
    out
}

/// Alternate Player One's moves with Player Two's filler moves,
/// returning the outcome of Player One's last move.
fn play_one_against_filler(
    session: &mut GameSession,
    ones: &[(i32, i32)],
    filler: &[(i32, i32)],
) -> MoveOutcome {
    let (last, rest) = ones.split_last().expect("at least one move");
    for (&one, &two) in rest.iter().zip(filler) {
        assert_eq!(session.submit_move(one.0, one.1), MoveOutcome::Placed(Player::One));
        assert_eq!(session.submit_move(two.0, two.1), MoveOutcome::Placed(Player::Two));
    }
    session.submit_move(last.0, last.1)
}

#[test]
fn test_horizontal_win_scenario() {
    let mut session = GameSession::new(10, 10).unwrap();
    let outcome = play_one_against_filler(
        &mut session,
        &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
        &[(0, 9), (2, 9), (4, 9), (6, 9)],
    );
    assert_eq!(
        outcome,
        MoveOutcome::PlacedAndWon(Player::One, run(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]))
    );
}

#[test]
fn test_diagonal_win_completed_at_lower_end() {
    let mut session = GameSession::new(10, 10).unwrap();
    let outcome = play_one_against_filler(
        &mut session,
        &[(1, 1), (2, 2), (3, 3), (4, 4), (0, 0)],
        &[(9, 0), (8, 0), (7, 0), (6, 0)],
    );
    assert_eq!(
        outcome,
        MoveOutcome::PlacedAndWon(Player::One, run(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]))
    );
}

#[test]
fn test_diagonal_completed_at_upper_end_is_not_detected() {
    // Forward and backward legs are counted separately, so a five that lies
    // entirely behind the new stone on the rising diagonal is not reported
    let mut session = GameSession::new(10, 10).unwrap();
    let outcome = play_one_against_filler(
        &mut session,
        &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)],
        &[(9, 0), (8, 0), (7, 0), (6, 0)],
    );
    assert_eq!(outcome, MoveOutcome::Placed(Player::One));
    assert!(!session.is_over());
}

#[test]
fn test_reset_scenario() {
    let mut session = GameSession::new(10, 10).unwrap();
    let outcome = play_one_against_filler(
        &mut session,
        &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)],
        &[(0, 9), (2, 9), (4, 9), (6, 9)],
    );
    assert!(matches!(outcome, MoveOutcome::PlacedAndWon(Player::One, _)));

    assert_eq!(
        session.submit_move(5, 5),
        MoveOutcome::Rejected(MoveError::GameAlreadyEnded)
    );

    session.reset();
    assert_eq!(session.submit_move(5, 5), MoveOutcome::Placed(Player::One));
    for (pos, cell) in session.board().iter() {
        let expected = if pos == Pos::new(5, 5) {
            Cell::Owned(Player::One)
        } else {
            Cell::Empty
        };
        assert_eq!(cell, expected, "unexpected contents at {pos}");
    }
}

#[test]
fn test_turn_parity_over_many_moves() {
    let mut session = GameSession::new(10, 10).unwrap();
    // Rows 0 and 5 alternate owners cell by cell, so no run ever forms
    let moves = (0..20).map(|i| (i % 10, (i / 10) * 5));

    for (n, (x, y)) in moves.enumerate() {
        assert!(session.submit_move(x, y).is_accepted());
        let accepted = n + 1;
        let expected = if accepted % 2 == 0 { Player::One } else { Player::Two };
        assert_eq!(session.current_turn(), expected);
    }
    assert!(!session.is_over());
    assert_eq!(session.move_count(), 20);
}

#[test]
fn test_repeated_invalid_moves_never_mutate() {
    let mut session = GameSession::new(5, 5).unwrap();
    session.submit_move(2, 2);
    let board = session.board().clone();
    let turn = session.current_turn();

    for _ in 0..10 {
        assert_eq!(
            session.submit_move(2, 2),
            MoveOutcome::Rejected(MoveError::CellOccupied { x: 2, y: 2 })
        );
        assert_eq!(
            session.submit_move(-1, 2),
            MoveOutcome::Rejected(MoveError::OutOfBounds { x: -1, y: 2 })
        );
    }
    assert_eq!(session.board(), &board);
    assert_eq!(session.current_turn(), turn);
}

#[test]
fn test_independent_sessions() {
    let mut first = GameSession::new(10, 10).unwrap();
    let mut second = GameSession::new(10, 10).unwrap();

    first.submit_move(3, 3);
    assert_eq!(second.cell(3, 3), Ok(Cell::Empty));
    assert_eq!(second.submit_move(3, 3), MoveOutcome::Placed(Player::One));
    assert_eq!(first.current_turn(), Player::Two);
}
