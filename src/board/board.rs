//! 8x8 grid of tri-state cells

use super::{Cell, Player, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board.
///
/// The board is a plain value: copying it duplicates every row, so a copy
/// can be changed without affecting the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Standard starting position: White on the NW-SE centre diagonal,
    /// Black on the NE-SW one.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Player::White);
        board.place_stone(Pos::new(4, 4), Player::White);
        board.place_stone(Pos::new(4, 3), Player::Black);
        board.place_stone(Pos::new(3, 4), Player::Black);
        board
    }

    /// Board with no stones at all
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.y as usize][pos.x as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Put a stone of `player` on `pos`, replacing whatever was there.
    /// Use `rules::apply_move` for game moves.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, player: Player) {
        self.cells[pos.y as usize][pos.x as usize] = player.cell();
    }

    /// Number of stones owned by `player`
    pub fn count(&self, player: Player) -> u32 {
        let cell = player.cell();
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count() as u32
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.count(Player::Black) + self.count(Player::White)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Iterate over every square in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        (0..TOTAL_CELLS).map(move |idx| {
            let pos = Pos::from_index(idx);
            (pos, self.get(pos))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
