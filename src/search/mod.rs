//! Search module for Reversi AI
//!
//! Contains the depth-bounded alpha-beta minimax used for autonomous play
//! and for move hints.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher};
