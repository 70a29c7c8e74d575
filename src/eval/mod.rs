//! Evaluation module for Jatsuna positions
//!
//! This module provides static scoring of board positions:
//! - The per-color heuristic (material, position weights, mobility)
//! - The coalition utility used when two AI seats gang up on the human
//! - The [`Evaluator`] trait the search is generic over

pub mod coalition;
pub mod heuristic;
pub mod weights;

pub use coalition::{partner_of, CoalitionTerms};
pub use heuristic::evaluate;
pub use weights::{position_weight, CoalitionWeight, EvalWeight};

use crate::board::{Board, Color};
use crate::config::Config;

/// Static evaluation seen from one color. Higher is better for that color.
pub trait Evaluator: Send + Sync {
    fn evaluate(&self, board: &Board, color: Color, config: &Config) -> f64;
}

/// The per-color heuristic of [`heuristic::evaluate`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Evaluator for Heuristic {
    #[inline]
    fn evaluate(&self, board: &Board, color: Color, config: &Config) -> f64 {
        heuristic::evaluate(board, color, config)
    }
}

/// Coalition utility against `human`; `color` is the searching AI color.
#[derive(Debug, Clone, Copy)]
pub struct Coalition {
    pub human: Color,
}

impl Evaluator for Coalition {
    #[inline]
    fn evaluate(&self, board: &Board, color: Color, config: &Config) -> f64 {
        coalition::evaluate(board, color, self.human, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::create_initial_board;

    #[test]
    fn test_trait_objects_match_free_functions() {
        let config = Config::standard();
        let board = create_initial_board(&config);
        let heuristic: &dyn Evaluator = &Heuristic;
        let coalition: &dyn Evaluator = &Coalition { human: Color::Gem };

        assert_eq!(
            heuristic.evaluate(&board, Color::Orb, &config),
            evaluate(&board, Color::Orb, &config)
        );
        assert_eq!(
            coalition.evaluate(&board, Color::Stella, &config),
            coalition::evaluate(&board, Color::Stella, Color::Gem, &config)
        );
    }
}
