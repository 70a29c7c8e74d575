//! Move generation and state transition
//!
//! Legal moves follow the forced-capture rule: when any empty cell flanks
//! something for the acting color, only capturing placements are legal that
//! turn. Otherwise every empty cell is a legal quiet placement. An empty
//! result means the color passes.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Color, Pos};
use crate::config::Config;

use super::capture::{captures_at, Capture};

/// A placement plus everything it flanks
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub target: Pos,
    /// Captured cells with their pre-capture colors, direction by direction
    pub captures: Vec<Capture>,
}

impl Move {
    /// Placement that flanks nothing
    pub fn quiet(target: Pos) -> Self {
        Self {
            target,
            captures: Vec::new(),
        }
    }

    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.captures.is_empty()
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captures.len()
    }

    /// Captured stones that were `color` before the move
    #[inline]
    pub fn captures_of(&self, color: Color) -> usize {
        self.captures.iter().filter(|c| c.color == color).count()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.target)?;
        if !self.is_quiet() {
            write!(f, " x{}", self.capture_count())?;
        }
        Ok(())
    }
}

/// Fresh board with the configured starting stones and walls.
pub fn create_initial_board(config: &Config) -> Board {
    let mut board = Board::new(config.board_size());
    let setup = config.setup();
    for &wall in &setup.walls {
        board.place_wall(wall);
    }
    for placement in &setup.stones {
        board.place_stone(placement.pos, placement.color);
    }
    board
}

/// Legal moves for `color`, row-major then column ascending.
///
/// # Arguments
/// * `board` - Current board state
/// * `color` - Color to move
/// * `config` - Game configuration (directions scanned)
///
/// # Returns
/// Only capturing moves if any exist, otherwise every quiet placement.
/// Empty when the board has no empty cell.
pub fn legal_moves(board: &Board, color: Color, config: &Config) -> Vec<Move> {
    let mut capturing = Vec::new();
    let mut quiet = Vec::new();

    for target in board.empty_cells() {
        let captures = captures_at(board, target, color, config);
        if !captures.is_empty() {
            capturing.push(Move { target, captures });
        } else if capturing.is_empty() {
            // Quiet moves only matter until the first capture turns up
            quiet.push(Move::quiet(target));
        }
    }

    if capturing.is_empty() {
        quiet
    } else {
        capturing
    }
}

/// Legal move for `color` targeting `pos`, if there is one.
pub fn find_move(board: &Board, color: Color, pos: Pos, config: &Config) -> Option<Move> {
    legal_moves(board, color, config)
        .into_iter()
        .find(|m| m.target == pos)
}

/// Play `mv` for `color` and return the resulting board.
///
/// Each captured cell becomes `dominance[color][original color]`; the input
/// board is left untouched.
///
/// # Panics
/// If the target is outside the board or not empty. The capture list is
/// trusted to come from [`legal_moves`] on the same board.
#[must_use]
pub fn apply_move(board: &Board, mv: &Move, color: Color, config: &Config) -> Board {
    assert!(
        board.contains(mv.target),
        "move target {} outside {}x{} board",
        mv.target,
        board.size(),
        board.size()
    );
    assert!(
        board.is_empty(mv.target),
        "move target {} is occupied by {:?}",
        mv.target,
        board.get(mv.target)
    );

    let mut next = board.clone();
    next.set(mv.target, Cell::Stone(color));
    let dominance = config.dominance();
    for capture in &mv.captures {
        debug_assert_eq!(board.color_at(capture.pos), Some(capture.color));
        next.set(capture.pos, Cell::Stone(dominance.converts(color, capture.color)));
    }
    next
}
