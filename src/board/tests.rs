use super::*;
use crate::error::{BoardError, MoveError};

fn snapshot(board: &Board) -> Vec<(Pos, Cell)> {
    board.iter().collect()
}

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_ids() {
    assert_eq!(Player::One.id(), 1);
    assert_eq!(Player::Two.id(), 2);
    assert_eq!(Player::Two.to_string(), "Player 2");
}

#[test]
fn test_cell_owner() {
    assert_eq!(Cell::Empty.owner(), None);
    assert_eq!(Cell::Owned(Player::One).owner(), Some(Player::One));
    assert!(Cell::default().is_empty());
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(10, 7).unwrap();
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 7);
    assert_eq!(board.stone_count(), 0);
    assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
    assert_eq!(board.iter().count(), 70);
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        Board::new(0, 5),
        Err(BoardError::InvalidDimensions { width: 0, height: 5 })
    );
    assert_eq!(
        Board::new(5, 0),
        Err(BoardError::InvalidDimensions { width: 5, height: 0 })
    );
}

#[test]
fn test_place_and_get() {
    let mut board = Board::new(10, 10).unwrap();
    let pos = board.place(3, 4, Player::Two).unwrap();
    assert_eq!(pos, Pos::new(3, 4));
    assert_eq!(board.get(3, 4), Ok(Cell::Owned(Player::Two)));
    assert_eq!(board.get(4, 3), Ok(Cell::Empty));
    assert_eq!(board.cell(Pos::new(3, 4)), Cell::Owned(Player::Two));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_out_of_bounds_leaves_board_unchanged() {
    let mut board = Board::new(6, 4).unwrap();
    board.place(1, 1, Player::One).unwrap();
    let before = snapshot(&board);

    for (x, y) in [(-1, 0), (0, -1), (6, 0), (0, 4), (6, 4), (i32::MIN, i32::MAX)] {
        assert_eq!(
            board.place(x, y, Player::Two),
            Err(MoveError::OutOfBounds { x, y })
        );
    }
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_place_occupied_leaves_board_unchanged() {
    let mut board = Board::new(5, 5).unwrap();
    board.place(2, 2, Player::One).unwrap();
    let before = snapshot(&board);

    assert_eq!(
        board.place(2, 2, Player::Two),
        Err(MoveError::CellOccupied { x: 2, y: 2 })
    );
    assert_eq!(
        board.place(2, 2, Player::One),
        Err(MoveError::CellOccupied { x: 2, y: 2 })
    );
    assert_eq!(snapshot(&board), before);
}

#[test]
fn test_get_out_of_bounds() {
    let board = Board::new(3, 3).unwrap();
    assert_eq!(board.get(3, 0), Err(MoveError::OutOfBounds { x: 3, y: 0 }));
    assert_eq!(board.get(0, -2), Err(MoveError::OutOfBounds { x: 0, y: -2 }));
}

#[test]
fn test_locate_non_square() {
    let board = Board::new(8, 3).unwrap();
    assert_eq!(board.locate(7, 2), Some(Pos::new(7, 2)));
    assert_eq!(board.locate(2, 7), None);
    assert!(board.contains(0, 0));
    assert!(!board.contains(8, 0));
}

#[test]
fn test_iter_is_row_major() {
    let mut board = Board::new(3, 2).unwrap();
    board.place(2, 0, Player::One).unwrap();
    board.place(0, 1, Player::Two).unwrap();

    let cells = snapshot(&board);
    assert_eq!(cells[2], (Pos::new(2, 0), Cell::Owned(Player::One)));
    assert_eq!(cells[3], (Pos::new(0, 1), Cell::Owned(Player::Two)));
}

#[test]
fn test_reset_clears_cells_keeps_dimensions() {
    let mut board = Board::new(4, 6).unwrap();
    board.place(0, 0, Player::One).unwrap();
    board.place(3, 5, Player::Two).unwrap();

    board.reset();
    assert_eq!(board.stone_count(), 0);
    assert_eq!((board.width(), board.height()), (4, 6));
    assert_eq!(board, Board::new(4, 6).unwrap());
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2, 1).unwrap();
    assert!(!board.is_full());
    board.place(0, 0, Player::One).unwrap();
    board.place(1, 0, Player::Two).unwrap();
    assert!(board.is_full());
}

#[test]
fn test_last_placement_wins_after_reset() {
    let mut board = Board::new(4, 4).unwrap();
    board.place(1, 2, Player::One).unwrap();
    board.reset();
    board.place(1, 2, Player::Two).unwrap();
    assert_eq!(board.get(1, 2), Ok(Cell::Owned(Player::Two)));
}

#[test]
fn test_oversized_dimensions_rejected() {
    let cases = [
        (MAX_SIDE + 1, 1),
        (1, MAX_SIDE + 1),
        (usize::MAX, 2),
        (usize::MAX / 2, usize::MAX / 4),
    ];
    for (width, height) in cases {
        assert_eq!(
            Board::new(width, height),
            Err(BoardError::TooLarge { width, height }),
            "{width}x{height}"
        );
    }
}

#[test]
fn test_unallocatable_board_rejected() {
    // Each side is addressable but the cell count cannot be allocated
    assert_eq!(
        Board::new(MAX_SIDE, MAX_SIDE),
        Err(BoardError::TooLarge { width: MAX_SIDE, height: MAX_SIDE })
    );
}
