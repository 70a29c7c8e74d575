//! Game rules for Jatsuna
//!
//! This module implements the rule set:
//! - Flank detection (runs of rival stones closed by an own anchor)
//! - Move generation with the forced-capture rule
//! - State transition through the dominance table
//! - Scoring, ranking and the pass/termination cycle

pub mod capture;
pub mod moves;
pub mod score;
pub mod turn;

// Re-exports for convenient access
pub use capture::{captures_at, captures_in_direction, count_captures, has_capture, Capture};
pub use moves::{apply_move, create_initial_board, find_move, legal_moves, Move};
pub use score::{score, Scores, Standing};
pub use turn::{GameState, TurnOutcome, TurnState};
