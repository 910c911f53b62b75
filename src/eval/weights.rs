//! Static positional weights
//!
//! Corners are worth the most, the squares touching a corner are heavily
//! penalised because they hand the corner to the opponent, edges are mildly
//! positive and the interior is close to neutral.

use crate::board::{Pos, BOARD_SIZE};

/// Positional weight per square, indexed `[y][x]`
pub const WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Weight of a single square
#[inline]
pub fn weight(pos: Pos) -> i32 {
    WEIGHTS[pos.y as usize][pos.x as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_dominate() {
        for corner in [Pos::new(0, 0), Pos::new(7, 0), Pos::new(0, 7), Pos::new(7, 7)] {
            assert_eq!(weight(corner), 100);
        }
    }

    #[test]
    fn test_corner_neighbours_are_negative() {
        assert!(weight(Pos::new(1, 0)) < 0);
        assert!(weight(Pos::new(0, 1)) < 0);
        assert!(weight(Pos::new(1, 1)) < weight(Pos::new(1, 0)));
    }

    #[test]
    fn test_table_is_symmetric() {
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                let w = WEIGHTS[y][x];
                assert_eq!(w, WEIGHTS[x][y], "transpose at ({x}, {y})");
                assert_eq!(w, WEIGHTS[y][BOARD_SIZE - 1 - x], "mirror at ({x}, {y})");
                assert_eq!(w, WEIGHTS[BOARD_SIZE - 1 - y][x], "flip at ({x}, {y})");
            }
        }
    }
}
