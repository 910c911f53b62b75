//! Game controller: turn alternation, passes, end of game and history
//! navigation, expressed as pure state transitions.

pub mod history;
pub mod state;

pub use history::{Action, History, MoveRecord, MoveRow};
pub use state::{Event, GameState, Outcome, Status, MAX_PLACEMENTS};
