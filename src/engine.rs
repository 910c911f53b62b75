//! Main AI engine wrapping the search for autonomous play and hints
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Board, Player};
//!
//! let mut engine = AIEngine::with_depth(3);
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Player::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::config::DEFAULT_DEPTH;
use crate::search::{SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the root position
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result from alpha-beta search
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI Engine for Reversi.
///
/// A thin layer over [`Searcher`] with a fixed search depth. The depth is
/// not range-checked here; callers keep it within
/// [`MIN_DEPTH`](crate::config::MIN_DEPTH)..=[`MAX_DEPTH`](crate::config::MAX_DEPTH).
#[derive(Debug)]
pub struct AIEngine {
    searcher: Searcher,
    depth: u8,
}

impl AIEngine {
    /// Create a new AI engine with the default depth.
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an AI engine searching `depth` plies.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(),
            depth,
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Get the best move for the given position, or `None` if `player`
    /// has no legal move (to be treated as a pass).
    #[must_use]
    pub fn get_move(&mut self, board: &Board, player: Player) -> Option<Pos> {
        self.get_move_with_stats(board, player).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, player: Player) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, player, self.depth);
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(pos) => debug!(
                "{player} depth {}: {pos} score {} ({} nodes, {time_ms}ms)",
                self.depth, result.score, result.nodes
            ),
            None => debug!("{player} depth {}: no legal move", self.depth),
        }

        MoveResult::from_search(result, time_ms)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn test_engine_with_depth() {
        let engine = AIEngine::with_depth(7);
        assert_eq!(engine.depth(), 7);
    }

    #[test]
    fn test_engine_opening_move() {
        let mut engine = AIEngine::with_depth(1);
        let result = engine.get_move_with_stats(&Board::new(), Player::Black);

        assert_eq!(result.best_move, Some(Pos::new(3, 2)));
        assert_eq!(result.depth, 1);
        assert_eq!(result.nodes, 5);
    }

    #[test]
    fn test_engine_move_is_legal() {
        let board = Board::new();
        let mut engine = AIEngine::with_depth(4);
        let pos = engine.get_move(&board, Player::White).unwrap();
        assert!(legal_moves(&board, Player::White).contains(&pos));
    }

    #[test]
    fn test_engine_no_move() {
        let mut board = Board::empty();
        board.place_stone(Pos::new(3, 3), Player::White);

        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board, Player::White), None);
        assert_eq!(engine.get_move(&board, Player::Black), None);
    }
}
