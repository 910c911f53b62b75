//! Move generation and flip propagation
//!
//! A placement is legal when, in at least one of the eight directions, it is
//! followed by a contiguous run of opponent stones that ends on one of the
//! mover's own stones. Every such run is flipped.

use crate::board::{Board, Player, Pos, BOARD_SIZE};

/// The eight unit scan directions `(dx, dy)`
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Result of applying a placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the placement and all flips
    pub board: Board,
    /// Every stone that changed color, in row-major order
    pub flipped: Vec<Pos>,
}

/// Collect the run of opponent stones starting next to `pos` along `(dx, dy)`.
///
/// Returns the run only if it is non-empty and closed by a stone of `player`
/// inside the board; an empty square or the board edge yields `None`.
fn bracketed_run(board: &Board, pos: Pos, dx: i32, dy: i32, player: Player) -> Option<Vec<Pos>> {
    let own = player.cell();
    let opponent = player.opponent().cell();
    let mut run = Vec::new();
    let mut cursor = pos.offset(dx, dy);

    while let Some(p) = cursor {
        let cell = board.get(p);
        if cell == opponent {
            run.push(p);
            cursor = p.offset(dx, dy);
        } else if cell == own {
            return (!run.is_empty()).then_some(run);
        } else {
            return None;
        }
    }

    None
}

/// Check whether `player` may place a stone on `pos`.
///
/// Off-board positions are never legal.
pub fn is_legal_move(board: &Board, pos: Pos, player: Player) -> bool {
    pos.in_bounds()
        && board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dx, dy)| bracketed_run(board, pos, dx, dy, player).is_some())
}

/// All legal placements for `player`, scanned row by row (y, then x).
///
/// The scan order is also the tie-break order used by the search.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<Pos> {
    let mut moves = Vec::new();
    for y in 0..BOARD_SIZE as u8 {
        for x in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(x, y);
            if is_legal_move(board, pos, player) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// Check whether `player` has at least one legal placement.
#[inline]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .iter()
        .any(|(pos, _)| is_legal_move(board, pos, player))
}

/// Place a stone for `player` on `pos` and flip every bracketed run.
///
/// The caller is responsible for legality; only emptiness of the target is
/// asserted in debug builds. An off-board `pos` leaves the board unchanged.
/// All directions are resolved against the original board, so flips never
/// cascade between directions.
#[must_use]
pub fn apply_move(board: &Board, pos: Pos, player: Player) -> MoveOutcome {
    if !pos.in_bounds() {
        return MoveOutcome {
            board: *board,
            flipped: Vec::new(),
        };
    }
    debug_assert!(board.is_empty(pos), "placement on occupied square {pos}");

    let mut flipped: Vec<Pos> = DIRECTIONS
        .iter()
        .filter_map(|&(dx, dy)| bracketed_run(board, pos, dx, dy, player))
        .flatten()
        .collect();
    flipped.sort();

    let mut next = *board;
    next.place_stone(pos, player);
    for &p in &flipped {
        next.place_stone(p, player);
    }

    MoveOutcome {
        board: next,
        flipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use pretty_assertions::assert_eq;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> Board {
        let mut board = Board::empty();
        for &(x, y) in black {
            board.place_stone(Pos::new(x, y), Player::Black);
        }
        for &(x, y) in white {
            board.place_stone(Pos::new(x, y), Player::White);
        }
        board
    }

    #[test]
    fn test_initial_legal_moves() {
        let board = Board::new();
        assert_eq!(
            legal_moves(&board, Player::Black),
            vec![Pos::new(3, 2), Pos::new(2, 3), Pos::new(5, 4), Pos::new(4, 5)]
        );
        assert_eq!(
            legal_moves(&board, Player::White),
            vec![Pos::new(4, 2), Pos::new(5, 3), Pos::new(2, 4), Pos::new(3, 5)]
        );
    }

    #[test]
    fn test_opening_move_flips_one() {
        let board = Board::new();
        let outcome = apply_move(&board, Pos::new(2, 3), Player::Black);

        assert_eq!(outcome.flipped, vec![Pos::new(3, 3)]);
        assert_eq!(outcome.board.count(Player::Black), 4);
        assert_eq!(outcome.board.count(Player::White), 1);
        assert_eq!(outcome.board.get(Pos::new(2, 3)), Cell::Black);
        // Source board untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_run_must_be_closed() {
        // B W W _ : closed run to the left
        let board = board_with(&[(0, 0)], &[(1, 0), (2, 0)]);
        assert!(is_legal_move(&board, Pos::new(3, 0), Player::Black));

        // _ W W _ : no own stone at the far end
        let board = board_with(&[], &[(1, 0), (2, 0)]);
        assert!(!is_legal_move(&board, Pos::new(3, 0), Player::Black));
    }

    #[test]
    fn test_run_ending_at_edge_is_illegal() {
        // W W W _ from the edge: the run runs off the board
        let board = board_with(&[(5, 5)], &[(0, 0), (1, 0), (2, 0)]);
        assert!(!is_legal_move(&board, Pos::new(3, 0), Player::Black));
    }

    #[test]
    fn test_adjacent_own_stone_is_not_a_run() {
        let board = board_with(&[(1, 0)], &[]);
        assert!(!is_legal_move(&board, Pos::new(0, 0), Player::Black));
    }

    #[test]
    fn test_occupied_square_is_illegal() {
        let board = Board::new();
        for (pos, cell) in board.iter() {
            if cell != Cell::Empty {
                assert!(!is_legal_move(&board, pos, Player::Black));
                assert!(!is_legal_move(&board, pos, Player::White));
            }
        }
    }

    #[test]
    fn test_flips_in_several_directions() {
        // Placement at (3,3) closes a horizontal, a vertical and a diagonal
        // run; the run towards (4,4) is open and must stay White.
        //   B . . B
        //   . W . W
        //   . . W W
        //   B W W _
        //   . . . . W
        let board = board_with(
            &[(0, 3), (3, 0), (0, 0)],
            &[(1, 3), (2, 3), (3, 1), (3, 2), (1, 1), (2, 2), (4, 4)],
        );
        let outcome = apply_move(&board, Pos::new(3, 3), Player::Black);

        assert_eq!(
            outcome.flipped,
            vec![
                Pos::new(1, 1),
                Pos::new(3, 1),
                Pos::new(2, 2),
                Pos::new(3, 2),
                Pos::new(1, 3),
                Pos::new(2, 3),
            ]
        );
        // (4,4) has no closing black stone behind it
        assert_eq!(outcome.board.get(Pos::new(4, 4)), Cell::White);
        assert_eq!(outcome.board.count(Player::White), 1);
    }

    #[test]
    fn test_flips_read_pre_move_board() {
        // (1,1) touches the flipped run but is not bracketed itself.
        let board = board_with(&[(3, 0)], &[(1, 0), (2, 0), (1, 1)]);
        let outcome = apply_move(&board, Pos::new(0, 0), Player::Black);

        assert_eq!(outcome.flipped, vec![Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(outcome.board.get(Pos::new(1, 1)), Cell::White);
    }

    #[test]
    fn test_stone_count_grows_by_one() {
        let board = Board::new();
        for pos in legal_moves(&board, Player::Black) {
            let outcome = apply_move(&board, pos, Player::Black);
            assert_eq!(outcome.board.stone_count(), board.stone_count() + 1);
            assert!(!outcome.flipped.is_empty());
        }
    }

    #[test]
    fn test_legal_moves_are_unique_and_empty() {
        // Walk a few plies deep checking every legal move list on the way
        let mut frontier = vec![(Board::new(), Player::Black)];
        for _ in 0..3 {
            let mut next = Vec::new();
            for (board, player) in frontier {
                let moves = legal_moves(&board, player);
                let mut dedup = moves.clone();
                dedup.dedup();
                assert_eq!(moves, dedup);
                for pos in moves {
                    assert!(board.is_empty(pos));
                    next.push((apply_move(&board, pos, player).board, player.opponent()));
                }
            }
            frontier = next;
        }
    }

    #[test]
    fn test_has_legal_move_matches_list() {
        let board = board_with(&[(0, 0)], &[]);
        assert!(!has_legal_move(&board, Player::Black));
        assert!(legal_moves(&board, Player::Black).is_empty());
        assert!(has_legal_move(&Board::new(), Player::White));
    }

    #[test]
    fn test_off_board_position_is_illegal() {
        let board = Board::new();
        for pos in [Pos { x: 8, y: 0 }, Pos { x: 0, y: 8 }, Pos { x: 255, y: 255 }] {
            assert!(!is_legal_move(&board, pos, Player::Black));

            let outcome = apply_move(&board, pos, Player::Black);
            assert_eq!(outcome.board, board);
            assert!(outcome.flipped.is_empty());
        }
    }
}
