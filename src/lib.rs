//! Reversi (Othello) engine with a computer opponent
//!
//! Standard 8x8 rules:
//! - Black moves first from the four-stone centre position
//! - A placement must bracket at least one line of opponent stones
//! - A side without a legal placement passes
//! - The game ends when neither side can move or the board is full
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation
//! - [`rules`]: Legal moves and flip propagation
//! - [`eval`]: Positional evaluation
//! - [`search`]: Alpha-beta minimax
//! - [`engine`]: AI engine used for autonomous play and hints
//! - [`game`]: Turn controller with undo/redo history
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, GameConfig, GameState, Player, Pos};
//!
//! // Human plays Black, the engine plays White
//! let game = GameState::new(GameConfig::default());
//! let game = game.place(Pos::new(2, 3)).unwrap();
//! assert_eq!(game.score(), (4, 1));
//!
//! let game = game.play_agent_turn().unwrap();
//! assert_eq!(game.to_move(), Player::Black);
//!
//! // Ask the engine directly
//! let mut engine = AIEngine::with_depth(3);
//! let suggestion = engine.get_move(game.board(), Player::Black);
//! assert!(suggestion.is_some());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Player, Pos, BOARD_SIZE};
pub use config::{GameConfig, SeatControl};
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
pub use game::{Event, GameState, Outcome, Status};
