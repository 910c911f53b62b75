//! Evaluation module for Reversi positions
//!
//! A fixed positional weight table, no adaptive terms.

pub mod heuristic;
pub mod weights;

pub use heuristic::evaluate;
pub use weights::{weight, WEIGHTS};
