//! Heuristic evaluation function for Jatsuna board positions
//!
//! This module provides the evaluation shared by every non-trivial tier.
//! It scores a board for one color based on:
//! - Material (stones held)
//! - Position weights (corners good, corner-adjacent cells bad)
//! - Mobility (legal moves available)
//!
//! Unlike a two-player game the score is not symmetric: with three colors
//! one side's loss is not the other side's gain.

use crate::board::{Board, Cell, Color};
use crate::config::Config;
use crate::rules::{legal_moves, score};

use super::weights::{position_weight, EvalWeight};

/// Evaluate the board from the perspective of the given color.
///
/// # Arguments
/// * `board` - The current board state
/// * `color` - The color to evaluate for
/// * `config` - Game configuration (mobility depends on the rules)
///
/// # Returns
/// Higher is better for `color`. Pure and deterministic.
#[must_use]
pub fn evaluate(board: &Board, color: Color, config: &Config) -> f64 {
    material_score(board, color) + positional_score(board, color) + mobility_score(board, color, config)
}

/// `2 x` stones held
#[inline]
pub fn material_score(board: &Board, color: Color) -> f64 {
    EvalWeight::MATERIAL * score(board).get(color) as f64
}

/// Position weights of own stones, minus half the weight of every rival stone.
pub fn positional_score(board: &Board, color: Color) -> f64 {
    let size = board.size();
    board
        .iter()
        .map(|(pos, cell)| {
            let weight = position_weight(pos.row as usize, pos.col as usize, size) as f64;
            match cell {
                Cell::Stone(c) if c == color => weight,
                Cell::Stone(_) => -EvalWeight::RIVAL_POSITION * weight,
                Cell::Empty | Cell::Wall => 0.0,
            }
        })
        .sum()
}

/// `5 x` legal moves
#[inline]
pub fn mobility_score(board: &Board, color: Color, config: &Config) -> f64 {
    EvalWeight::MOBILITY * legal_moves(board, color, config).len() as f64
}
