//! Heuristic evaluation function for Reversi board positions
//!
//! The score is purely positional: the sum of square weights under the
//! evaluated player's stones minus the same sum for the opponent.

use crate::board::{Board, Cell, Player};

use super::weights::weight;

/// Evaluate the board from the perspective of the given player.
///
/// Positive values favour `player`. Empty squares contribute nothing, and
/// `evaluate(board, Black) == -evaluate(board, White)` always holds.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let own = player.cell();
    board
        .iter()
        .map(|(pos, cell)| match cell {
            Cell::Empty => 0,
            c if c == own => weight(pos),
            _ => -weight(pos),
        })
        .sum()
}
