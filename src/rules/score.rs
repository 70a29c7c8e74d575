//! Scoring and final ranking
//!
//! A color's score is the number of cells it holds. It is always recomputed
//! from the board, never tracked separately.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

/// Stone counts per color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    counts: [u32; 3],
}

impl Scores {
    #[inline]
    pub fn get(&self, color: Color) -> u32 {
        self.counts[color.index()]
    }

    /// Sum over all colors
    #[inline]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Highest score on the board
    #[inline]
    pub fn best(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Standings in descending score order with competition ranks: tied
    /// colors share a rank and the following rank is skipped (1, 1, 3).
    /// Ties keep the order of `players`.
    pub fn ranking(&self, players: &[Color]) -> Vec<Standing> {
        let mut standings: Vec<Standing> = players
            .iter()
            .map(|&color| Standing {
                color,
                score: self.get(color),
                rank: 0,
            })
            .collect();
        // Stable sort keeps turn order among ties
        standings.sort_by(|a, b| b.score.cmp(&a.score));

        for i in 0..standings.len() {
            standings[i].rank = if i > 0 && standings[i].score == standings[i - 1].score {
                standings[i - 1].rank
            } else {
                i + 1
            };
        }
        standings
    }

    /// Sole leader, or `None` on a shared lead
    pub fn winner(&self) -> Option<Color> {
        let best = self.best();
        let mut leaders = Color::ALL.into_iter().filter(|&c| self.get(c) == best);
        match (leaders.next(), leaders.next()) {
            (Some(color), None) => Some(color),
            _ => None,
        }
    }
}

/// One line of the final ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub color: Color,
    pub score: u32,
    /// 1-based
    pub rank: usize,
}

/// Count stones per color. Walls and empty cells score for nobody.
pub fn score(board: &Board) -> Scores {
    let mut counts = [0u32; 3];
    for (_, cell) in board.iter() {
        if let Some(color) = cell.color() {
            counts[color.index()] += 1;
        }
    }
    Scores { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_stones_only() {
        let board = Board::from_rows(&["OO#", "C.P", "PP."]).unwrap();
        let scores = score(&board);
        assert_eq!(scores.get(Color::Orb), 2);
        assert_eq!(scores.get(Color::Gem), 1);
        assert_eq!(scores.get(Color::Stella), 3);
        assert_eq!(scores.total() as usize, board.stone_count());
    }

    #[test]
    fn test_ranking_orders_by_score() {
        let board = Board::from_rows(&["OO.", "C..", "PPP"]).unwrap();
        let ranking = score(&board).ranking(&Color::ALL);
        let colors: Vec<Color> = ranking.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![Color::Stella, Color::Orb, Color::Gem]);
        assert_eq!(ranking.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_ranking_shares_ranks_on_ties() {
        let board = Board::from_rows(&["OO.", "CC.", "P.."]).unwrap();
        let ranking = score(&board).ranking(&[Color::Gem, Color::Stella, Color::Orb]);
        // Gem sits first in turn order, so it leads the tie
        assert_eq!(ranking[0].color, Color::Gem);
        assert_eq!(ranking[1].color, Color::Orb);
        assert_eq!(ranking.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![1, 1, 3]);
    }

    #[test]
    fn test_winner() {
        let board = Board::from_rows(&["OO.", "C..", "P.."]).unwrap();
        assert_eq!(score(&board).winner(), Some(Color::Orb));

        let tied = Board::from_rows(&["OO.", "CC.", "P.."]).unwrap();
        assert_eq!(score(&tied).winner(), None);
    }
}
