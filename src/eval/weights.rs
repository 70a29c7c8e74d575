//! Evaluation weights
//!
//! These constants define the scoring weights used by the heuristic and the
//! coalition utility, plus the corner/edge position table.

/// Weights of the per-color heuristic
pub struct EvalWeight;

impl EvalWeight {
    /// Per stone held
    pub const MATERIAL: f64 = 2.0;
    /// Per legal move available
    pub const MOBILITY: f64 = 5.0;
    /// Share of a cell's weight charged when a rival holds it
    pub const RIVAL_POSITION: f64 = 0.5;
}

/// Weights of the coalition utility
pub struct CoalitionWeight;

impl CoalitionWeight {
    /// Per human stone
    pub const HUMAN_MATERIAL: f64 = 4.0;
    /// Per human legal move
    pub const HUMAN_MOBILITY: f64 = 8.0;
    /// Per stone of the searching color's partner, on top of the coalition total
    pub const PARTNER_MATERIAL: f64 = 0.7;
    /// Per human stone the searching color could flank right now
    pub const CAPTURE_PRESSURE: f64 = 15.0;

    pub const HUMAN_CORNER: f64 = 100.0;
    pub const HUMAN_EDGE: f64 = 50.0;
    pub const HUMAN_INTERIOR: f64 = 5.0;
    pub const COALITION_CORNER: f64 = 80.0;
    pub const COALITION_EDGE: f64 = 40.0;
}

/// Top-left quadrant of the 7x7 position table, indexed by distance from the
/// nearest horizontal and vertical edge. Corners are prized, the cells that
/// hand a corner to the opponent are poison, the centre is neutral.
const QUADRANT: [[i32; 4]; 4] = [
    [120, -20, 20, 5],
    [-20, -40, -5, -5],
    [20, -5, 15, 3],
    [5, -5, 3, 0],
];

/// Position weight of a cell on a `size` x `size` board.
///
/// Folds the cell onto the quadrant table; distances beyond 3 count as 3,
/// so larger boards get a neutral interior.
#[inline]
pub fn position_weight(row: usize, col: usize, size: usize) -> i32 {
    debug_assert!(row < size && col < size);
    let dr = row.min(size - 1 - row).min(3);
    let dc = col.min(size - 1 - col).min(3);
    QUADRANT[dr][dc]
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC_7X7: [[i32; 7]; 7] = [
        [120, -20, 20, 5, 20, -20, 120],
        [-20, -40, -5, -5, -5, -40, -20],
        [20, -5, 15, 3, 15, -5, 20],
        [5, -5, 3, 0, 3, -5, 5],
        [20, -5, 15, 3, 15, -5, 20],
        [-20, -40, -5, -5, -5, -40, -20],
        [120, -20, 20, 5, 20, -20, 120],
    ];

    #[test]
    fn test_matches_classic_table_on_7x7() {
        for (r, row) in CLASSIC_7X7.iter().enumerate() {
            for (c, &w) in row.iter().enumerate() {
                assert_eq!(position_weight(r, c, 7), w, "cell ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_table_is_symmetric() {
        for size in [5, 7, 9, 11] {
            for r in 0..size {
                for c in 0..size {
                    let w = position_weight(r, c, size);
                    assert_eq!(w, position_weight(c, r, size));
                    assert_eq!(w, position_weight(size - 1 - r, c, size));
                    assert_eq!(w, position_weight(r, size - 1 - c, size));
                }
            }
        }
    }

    #[test]
    fn test_corners_dominate() {
        for size in [5, 7, 9] {
            let corner = position_weight(0, 0, size);
            for r in 0..size {
                for c in 0..size {
                    assert!(position_weight(r, c, size) <= corner);
                }
            }
            assert!(position_weight(1, 1, size) < 0, "x-square must be negative");
        }
    }

    #[test]
    fn test_large_board_interior_is_neutral() {
        assert_eq!(position_weight(5, 5, 11), 0);
        assert_eq!(position_weight(4, 6, 11), 0);
    }
}
