//! Coalition utility
//!
//! Two AI colors share one utility against the human seat. The score rewards
//! the coalition's combined stones and border cells, punishes the human's
//! stones, mobility and border cells, and rewards capture threats against the
//! human. Higher is better for the coalition.

use crate::board::{Board, Cell, Color, Pos};
use crate::config::Config;
use crate::rules::{legal_moves, score};

use super::weights::CoalitionWeight;

/// Breakdown of the coalition utility, one field per term
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoalitionTerms {
    /// Stones held by both AI colors
    pub coalition_material: u32,
    pub human_material: u32,
    pub human_mobility: usize,
    /// Stones of the AI color that is not searching
    pub partner_material: u32,
    /// Corner/edge bonuses for the coalition minus penalties for the human
    pub territory: f64,
    /// Human stones the searching color could flank with its current moves
    pub capture_pressure: usize,
}

impl CoalitionTerms {
    /// Gather every term for `ai` playing against `human`.
    ///
    /// # Panics
    /// If `ai == human`.
    pub fn collect(board: &Board, ai: Color, human: Color, config: &Config) -> Self {
        assert_ne!(ai, human, "the human seat cannot be part of the coalition");
        let partner = partner_of(ai, human);
        let scores = score(board);
        let size = board.size();

        let territory = board
            .iter()
            .map(|(pos, cell)| match cell {
                Cell::Stone(c) if c == human => -human_cell_penalty(pos, size),
                Cell::Stone(_) => coalition_cell_bonus(pos, size),
                Cell::Empty | Cell::Wall => 0.0,
            })
            .sum();

        let capture_pressure = legal_moves(board, ai, config)
            .iter()
            .map(|mv| mv.captures_of(human))
            .sum();

        Self {
            coalition_material: scores.get(ai) + scores.get(partner),
            human_material: scores.get(human),
            human_mobility: legal_moves(board, human, config).len(),
            partner_material: scores.get(partner),
            territory,
            capture_pressure,
        }
    }

    /// Weighted sum of the terms
    pub fn total(&self) -> f64 {
        self.coalition_material as f64
            - CoalitionWeight::HUMAN_MATERIAL * self.human_material as f64
            - CoalitionWeight::HUMAN_MOBILITY * self.human_mobility as f64
            + CoalitionWeight::PARTNER_MATERIAL * self.partner_material as f64
            + self.territory
            + CoalitionWeight::CAPTURE_PRESSURE * self.capture_pressure as f64
    }
}

/// Evaluate the board for the coalition, seen from the searching AI color.
#[must_use]
pub fn evaluate(board: &Board, ai: Color, human: Color, config: &Config) -> f64 {
    CoalitionTerms::collect(board, ai, human, config).total()
}

/// The coalition member that is neither `ai` nor `human`
#[inline]
pub fn partner_of(ai: Color, human: Color) -> Color {
    Color::ALL
        .into_iter()
        .find(|&c| c != ai && c != human)
        .unwrap_or(ai)
}

#[inline]
fn human_cell_penalty(pos: Pos, size: usize) -> f64 {
    if pos.is_corner(size) {
        CoalitionWeight::HUMAN_CORNER
    } else if pos.is_edge(size) {
        CoalitionWeight::HUMAN_EDGE
    } else {
        CoalitionWeight::HUMAN_INTERIOR
    }
}

#[inline]
fn coalition_cell_bonus(pos: Pos, size: usize) -> f64 {
    if pos.is_corner(size) {
        CoalitionWeight::COALITION_CORNER
    } else if pos.is_edge(size) {
        CoalitionWeight::COALITION_EDGE
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_of() {
        assert_eq!(partner_of(Color::Orb, Color::Gem), Color::Stella);
        assert_eq!(partner_of(Color::Stella, Color::Orb), Color::Gem);
    }

    #[test]
    fn test_more_capture_pressure_is_better_for_coalition() {
        let base = CoalitionTerms {
            coalition_material: 6,
            human_material: 4,
            human_mobility: 10,
            partner_material: 3,
            territory: 40.0,
            capture_pressure: 0,
        };
        let mut previous = base.total();
        for pressure in 1..=5 {
            let terms = CoalitionTerms { capture_pressure: pressure, ..base };
            let total = terms.total();
            assert!(total > previous, "pressure {} should improve the utility", pressure);
            previous = total;
        }
    }

    #[test]
    fn test_collect_terms() {
        let config = Config::standard();
        // Human is Gem. Orb at a corner threatens the Gem pair on row 0.
        let board = Board::from_rows(&[
            "OCC....",
            ".......",
            ".......",
            "...P...",
            ".......",
            ".......",
            ".......",
        ])
        .unwrap();
        let terms = CoalitionTerms::collect(&board, Color::Orb, Color::Gem, &config);

        assert_eq!(terms.coalition_material, 2);
        assert_eq!(terms.human_material, 2);
        assert_eq!(terms.partner_material, 1);
        // Orb's only legal move is (0,3), flanking both Gem stones
        assert_eq!(terms.capture_pressure, 2);
        // Orb corner +80, Gem edges -50 each, Stella interior 0
        assert_eq!(terms.territory, 80.0 - 100.0);
        assert_eq!(evaluate(&board, Color::Orb, Color::Gem, &config), terms.total());
    }

    #[test]
    fn test_capture_threat_raises_utility() {
        let config = Config::standard();
        // Same material and territory; only the open end of the Gem pair differs
        let threatened = Board::from_rows(&[".CCO.", ".....", "..P..", ".....", "....."]).unwrap();
        let blocked = Board::from_rows(&["#CCO.", ".....", "..P..", ".....", "....."]).unwrap();

        let a = CoalitionTerms::collect(&threatened, Color::Orb, Color::Gem, &config);
        let b = CoalitionTerms::collect(&blocked, Color::Orb, Color::Gem, &config);
        assert_eq!(a.capture_pressure, 2);
        assert_eq!(b.capture_pressure, 0);
        assert_eq!(a.human_mobility, b.human_mobility);
        assert!(a.total() > b.total());
    }

    #[test]
    #[should_panic(expected = "cannot be part of the coalition")]
    fn test_human_cannot_search_for_coalition() {
        let config = Config::standard();
        let board = Board::new(5);
        evaluate(&board, Color::Gem, Color::Gem, &config);
    }
}
