use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_player_cell() {
    assert_eq!(Player::Black.cell(), Cell::Black);
    assert_eq!(Player::White.cell(), Cell::White);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.x, 2);
    assert_eq!(pos.y, 3);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(), 3 * 8 + 2);
    assert_eq!(pos.to_index(), 26);

    let pos2 = Pos::from_index(26);
    assert_eq!(pos2.x, 2);
    assert_eq!(pos2.y, 3);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_in_bounds() {
    assert!(Pos::new(0, 0).in_bounds());
    assert!(Pos::new(7, 7).in_bounds());
    assert!(!Pos { x: 8, y: 0 }.in_bounds());
    assert!(!Pos { x: 3, y: 200 }.in_bounds());
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(2, 3).to_string(), "C4");
    assert_eq!(Pos::new(0, 0).to_string(), "A1");
    assert_eq!(Pos::new(7, 7).to_string(), "H8");
}

#[test]
fn test_pos_ordering_is_row_major() {
    let a = Pos::new(7, 0);
    let b = Pos::new(0, 1);
    let c = Pos::new(1, 1);

    assert!(a < b);
    assert!(b < c);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
}

#[test]
fn test_initial_position() {
    let board = Board::new();
    assert_eq!(board.get(Pos::new(3, 3)), Cell::White);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::White);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Black);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Black);
    assert_eq!(board.count(Player::Black), 2);
    assert_eq!(board.count(Player::White), 2);
    assert_eq!(board.stone_count(), 4);
}

#[test]
fn test_copy_is_independent() {
    let original = Board::new();
    let mut copy = original;
    copy.place_stone(Pos::new(0, 0), Player::Black);
    copy.place_stone(Pos::new(3, 3), Player::Black);

    assert!(original.is_empty(Pos::new(0, 0)));
    assert_eq!(original.get(Pos::new(3, 3)), Cell::White);
    assert_ne!(original, copy);
}

#[test]
fn test_empty_board() {
    let board = Board::empty();
    assert_eq!(board.stone_count(), 0);
    assert!(board.iter().all(|(_, cell)| cell == Cell::Empty));
    assert!(!board.is_full());
}

#[test]
fn test_iter_row_major() {
    let board = Board::new();
    let positions: Vec<Pos> = board.iter().map(|(pos, _)| pos).collect();
    assert_eq!(positions.len(), TOTAL_CELLS);
    assert_eq!(positions[0], Pos::new(0, 0));
    assert_eq!(positions[8], Pos::new(0, 1));
}
