//! Depth-bounded minimax with alpha-beta pruning
//!
//! Moves are tried in row-major scan order and a move only replaces the
//! current best on a strictly better score, so the first of several equal
//! moves wins and results are fully deterministic.
//!
//! Leaves are scored with [`evaluate`] for the side to move *at that leaf*,
//! not for the root side. A node whose side to move has no legal placement
//! is treated as a leaf; the search never recurses through a pass.
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Player, Pos};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&Board::new(), Player::Black, 1);
//! assert_eq!(result.best_move, Some(Pos::new(3, 2)));
//! ```

use crate::board::{Board, Player, Pos};
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves};

/// Infinity score for alpha-beta bounds (well above any reachable evaluation)
const INF: i32 = 1_000_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` when the root side has no legal move
    pub best_move: Option<Pos>,
    /// Minimax value of the root
    pub score: i32,
    /// Requested depth
    pub depth: u8,
    /// Total nodes visited, root included
    pub nodes: u64,
}

/// Alpha-beta searcher.
///
/// Holds nothing between searches apart from the node counter.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `depth` plies ahead for `player`, who maximizes at the root.
    ///
    /// `depth` is expected to be at least 1; at depth 0 the root is a leaf
    /// and no move is returned.
    pub fn search(&mut self, board: &Board, player: Player, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) = self.alpha_beta(board, depth, true, player, -INF, INF);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Nodes visited by the last search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        player: Player,
        mut alpha: i32,
        mut beta: i32,
    ) -> (Option<Pos>, i32) {
        self.nodes += 1;

        let moves = legal_moves(board, player);
        if depth == 0 || moves.is_empty() {
            return (None, evaluate(board, player));
        }

        let mut best_move = None;

        if maximizing {
            let mut best_score = -INF;
            for pos in moves {
                let child = apply_move(board, pos, player).board;
                let (_, score) =
                    self.alpha_beta(&child, depth - 1, false, player.opponent(), alpha, beta);

                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(best_score);
                if beta <= alpha {
                    break;
                }
            }
            (best_move, best_score)
        } else {
            let mut best_score = INF;
            for pos in moves {
                let child = apply_move(board, pos, player).board;
                let (_, score) =
                    self.alpha_beta(&child, depth - 1, true, player.opponent(), alpha, beta);

                if score < best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                beta = beta.min(best_score);
                if beta <= alpha {
                    break;
                }
            }
            (best_move, best_score)
        }
    }
}
