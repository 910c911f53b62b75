//! Rejected game events
//!
//! None of these are fatal: a rejected event leaves the game exactly as it
//! was, which is how illegal input is ignored.

use thiserror::Error;

use crate::board::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move at {0}")]
    IllegalMove(Pos),
    #[error("game is over")]
    GameOver,
    #[error("not a human turn")]
    NotHumanTurn,
    #[error("not an agent turn")]
    NotAgentTurn,
    #[error("agent is thinking")]
    AgentInFlight,
    #[error("no agent move pending")]
    NoAgentInFlight,
    #[error("nothing to undo")]
    NothingToUndo,
    #[error("nothing to redo")]
    NothingToRedo,
}

pub type GameResult<T> = Result<T, GameError>;
