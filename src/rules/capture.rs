//! Flank detection
//!
//! Capture pattern: X-Y...Y-X along one direction, where X is the stone being
//! placed plus an existing anchor of the same color, and every Y is a stone of
//! some other color. The run may mix both rivals. Walls, empty cells and the
//! board edge all break a run without capturing.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Color, Pos};
use crate::config::Config;

/// One captured cell with its color before conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub pos: Pos,
    pub color: Color,
}

/// Find the run flanked from `pos` along `dir`.
///
/// # Arguments
/// * `board` - Current board state
/// * `pos` - Position where the stone would be placed
/// * `color` - Color of the stone being placed
/// * `dir` - Unit step `(dr, dc)`
///
/// # Returns
/// The run in order of distance from `pos`, or an empty vector when the run
/// has no anchor.
pub fn captures_in_direction(board: &Board, pos: Pos, color: Color, dir: (i8, i8)) -> Vec<Capture> {
    let size = board.size();
    let mut run = Vec::new();
    let mut step = 1;

    while let Some(next) = pos.offset(dir, step, size) {
        match board.get(next) {
            Cell::Stone(c) if c != color => run.push(Capture { pos: next, color: c }),
            Cell::Stone(_) => {
                // Anchor reached
                return run;
            }
            Cell::Empty | Cell::Wall => break,
        }
        step += 1;
    }

    run.clear();
    run
}

/// All captures a stone at `pos` would make, direction by direction in
/// configured order.
///
/// An occupied `pos` captures nothing.
pub fn captures_at(board: &Board, pos: Pos, color: Color, config: &Config) -> Vec<Capture> {
    if !board.is_empty(pos) {
        return Vec::new();
    }

    let mut captured = Vec::new();
    for &dir in config.directions() {
        captured.extend(captures_in_direction(board, pos, color, dir));
    }
    captured
}

/// Check if a stone at `pos` would capture anything.
///
/// Stops at the first anchored run instead of collecting all of them.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, color: Color, config: &Config) -> bool {
    board.is_empty(pos)
        && config
            .directions()
            .iter()
            .any(|&dir| !captures_in_direction(board, pos, color, dir).is_empty())
}

/// Count how many stones a stone at `pos` would capture.
#[inline]
pub fn count_captures(board: &Board, pos: Pos, color: Color, config: &Config) -> usize {
    captures_at(board, pos, color, config).len()
}
