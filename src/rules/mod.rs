//! Game rules for Reversi
//!
//! This module implements the placement rules:
//! - Legal move enumeration (bracketing in eight directions)
//! - Move application with flip propagation

pub mod moves;

// Re-exports for convenient access
pub use moves::{apply_move, has_legal_move, is_legal_move, legal_moves, MoveOutcome, DIRECTIONS};
