//! Shallow move-selection tiers
//!
//! None of these look deeper than one reply. Every random draw goes through
//! the caller's `Rng`, so a seeded generator reproduces a game exactly.

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color};
use crate::config::Config;
use crate::eval::Evaluator;
use crate::rules::{apply_move, legal_moves, Move};

/// Weight of the best enemy reply in the one-ply lookahead
pub const REPLY_WEIGHT: f64 = 0.5;

/// Uniform choice over the legal moves.
pub fn random_move<R>(board: &Board, color: Color, config: &Config, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    legal_moves(board, color, config).choose(rng).cloned()
}

/// A deliberately poor player: some share of moves are uniform random, the
/// rest are drawn among the moves that flank least and avoid corners.
pub fn weak_move<R>(board: &Board, color: Color, config: &Config, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    let moves = legal_moves(board, color, config);
    if moves.is_empty() {
        return None;
    }
    let search = config.search();
    if rng.gen_bool(search.weak_random_fraction) {
        return moves.choose(rng).cloned();
    }

    let size = board.size();
    let weight = |mv: &Move| {
        let corner = if mv.target.is_corner(size) {
            search.weak_corner_penalty
        } else {
            0.0
        };
        mv.capture_count() as f64 + corner
    };
    let lowest = moves.iter().map(weight).fold(f64::INFINITY, f64::min);
    let candidates: Vec<&Move> = moves.iter().filter(|mv| weight(*mv) == lowest).collect();
    candidates.choose(rng).map(|mv| (*mv).clone())
}

/// Most stones flanked, corners preferred, with a small random jitter
/// breaking ties. First strictly better move wins.
pub fn greedy_move<R>(board: &Board, color: Color, config: &Config, rng: &mut R) -> Option<Move>
where
    R: Rng + ?Sized,
{
    let search = config.search();
    let size = board.size();
    let mut best: Option<(Move, f64)> = None;

    for mv in legal_moves(board, color, config) {
        let mut score = mv.capture_count() as f64;
        if mv.target.is_corner(size) {
            score += search.greedy_corner_bonus;
        }
        if search.greedy_jitter > 0.0 {
            score += rng.gen_range(0.0..search.greedy_jitter);
        }
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((mv, score));
        }
    }
    best.map(|(mv, _)| mv)
}

/// One-ply lookahead score of playing `mv`: own evaluation afterwards, minus
/// half of what the next color's best reply is worth to that color.
pub fn lookahead_score(
    board: &Board,
    mv: &Move,
    color: Color,
    evaluator: &dyn Evaluator,
    config: &Config,
) -> f64 {
    let after = apply_move(board, mv, color, config);
    let own = evaluator.evaluate(&after, color, config);

    let next = config.next_color(color);
    let threat = legal_moves(&after, next, config)
        .iter()
        .map(|reply| {
            let reply_board = apply_move(&after, reply, next, config);
            evaluator.evaluate(&reply_board, next, config)
        })
        .reduce(f64::max)
        .unwrap_or(0.0);

    own - REPLY_WEIGHT * threat
}

/// Best move by [`lookahead_score`]; first strictly better move wins.
pub fn positional_move(
    board: &Board,
    color: Color,
    evaluator: &dyn Evaluator,
    config: &Config,
) -> Option<Move> {
    positional_move_with_score(board, color, evaluator, config).map(|(mv, _)| mv)
}

/// [`positional_move`] together with its lookahead score
pub fn positional_move_with_score(
    board: &Board,
    color: Color,
    evaluator: &dyn Evaluator,
    config: &Config,
) -> Option<(Move, f64)> {
    let mut best: Option<(Move, f64)> = None;
    for mv in legal_moves(board, color, config) {
        let score = lookahead_score(board, &mv, color, evaluator, config);
        trace!("one-ply {} {} -> {:.2}", color, mv, score);
        if best.as_ref().map_or(true, |(_, s)| score > *s) {
            best = Some((mv, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::config::SearchConfig;
    use crate::eval::Heuristic;
    use crate::rules::create_initial_board;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn full_board() -> Board {
        Board::from_rows(&["OCP", "PCO", "CO#"]).unwrap()
    }

    #[test]
    fn test_every_tier_passes_on_full_board() {
        let config = Config::standard();
        let board = full_board();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(random_move(&board, Color::Orb, &config, &mut rng).is_none());
        assert!(weak_move(&board, Color::Orb, &config, &mut rng).is_none());
        assert!(greedy_move(&board, Color::Orb, &config, &mut rng).is_none());
        assert!(positional_move(&board, Color::Orb, &Heuristic, &config).is_none());
    }

    #[test]
    fn test_random_move_is_legal_and_seeded() {
        let config = Config::standard();
        let board = create_initial_board(&config);
        let legal = legal_moves(&board, Color::Gem, &config);

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let mv = random_move(&board, Color::Gem, &config, &mut a).unwrap();
            assert!(legal.contains(&mv));
            assert_eq!(Some(mv), random_move(&board, Color::Gem, &config, &mut b));
        }
    }

    #[test]
    fn test_greedy_prefers_bigger_capture() {
        let config = Config::standard();
        // (0,4) flanks three, (1,2) flanks one
        let board = Board::from_rows(&["OPPP.", "OP.##", "#####", "#####", "#####"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let mv = greedy_move(&board, Color::Orb, &config, &mut rng).unwrap();
            assert_eq!(mv.target, Pos::new(0, 4));
        }
    }

    #[test]
    fn test_greedy_likes_corners() {
        let config = Config::standard();
        let board = Board::from_rows(&[".#.", ".P#", ".#O"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mv = greedy_move(&board, Color::Gem, &config, &mut rng).unwrap();
        assert!(mv.target.is_corner(3));
    }

    #[test]
    fn test_greedy_without_jitter_is_first_best() {
        let search = SearchConfig {
            greedy_jitter: 0.0,
            ..SearchConfig::default()
        };
        let config = Config::standard().with_search(search).unwrap();
        let board = create_initial_board(&config);
        let mut rng = StdRng::seed_from_u64(0);
        // all quiet; the first corner in row-major order wins
        let mv = greedy_move(&board, Color::Orb, &config, &mut rng).unwrap();
        assert_eq!(mv.target, Pos::new(0, 0));
    }

    #[test]
    fn test_weak_avoids_captures_and_corners() {
        let search = SearchConfig {
            weak_random_fraction: 0.0,
            ..SearchConfig::default()
        };
        let config = Config::standard().with_search(search).unwrap();
        let board = Board::from_rows(&["OPPP.", "OP.##", "#####", "#####", "#####"]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10 {
            let mv = weak_move(&board, Color::Orb, &config, &mut rng).unwrap();
            assert_eq!(mv.target, Pos::new(1, 2));
        }

        let open = Board::from_rows(&["...", ".#.", "..."]).unwrap();
        for _ in 0..20 {
            let mv = weak_move(&open, Color::Orb, &config, &mut rng).unwrap();
            assert!(!mv.target.is_corner(3));
        }
    }

    #[test]
    fn test_weak_fully_random() {
        let search = SearchConfig {
            weak_random_fraction: 1.0,
            ..SearchConfig::default()
        };
        let config = Config::standard().with_search(search).unwrap();
        let open = Board::from_rows(&["...", ".#.", "..."]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let corners = (0..200)
            .filter_map(|_| weak_move(&open, Color::Orb, &config, &mut rng))
            .filter(|mv| mv.target.is_corner(3))
            .count();
        assert!(corners > 0);
    }

    #[test]
    fn test_positional_prefers_capturing_three_over_one() {
        let config = Config::standard();
        let board = Board::from_rows(&["OPPP.", "OP.##", "#####", "#####", "#####"]).unwrap();
        let moves = legal_moves(&board, Color::Orb, &config);
        let targets: Vec<Pos> = moves.iter().map(|mv| mv.target).collect();
        assert_eq!(targets, vec![Pos::new(0, 4), Pos::new(1, 2)]);

        let three = lookahead_score(&board, &moves[0], Color::Orb, &Heuristic, &config);
        let one = lookahead_score(&board, &moves[1], Color::Orb, &Heuristic, &config);
        assert!(three > one);

        let mv = positional_move(&board, Color::Orb, &Heuristic, &config).unwrap();
        assert_eq!(mv.capture_count(), 3);

        let (scored, score) = positional_move_with_score(&board, Color::Orb, &Heuristic, &config).unwrap();
        assert_eq!(scored, mv);
        assert_eq!(score, three);
    }

    #[test]
    fn test_lookahead_without_reply() {
        let config = Config::standard();
        // Orb fills the last cell, nobody can answer
        let board = Board::from_rows(&["OCP", "PCO", "C#."]).unwrap();
        let mv = legal_moves(&board, Color::Orb, &config).remove(0);
        let after = apply_move(&board, &mv, Color::Orb, &config);
        assert_eq!(
            lookahead_score(&board, &mv, Color::Orb, &Heuristic, &config),
            Heuristic.evaluate(&after, Color::Orb, &config)
        );
    }
}
