//! End-to-end tests of the rule engine and the AI tiers

mod common;

use jatsuna::board::{Board, Cell, Color, Pos};
use jatsuna::config::{Config, Layout};
use jatsuna::eval::coalition::CoalitionTerms;
use jatsuna::eval::Heuristic;
use jatsuna::rules::{apply_move, create_initial_board, find_move, legal_moves, score};
use jatsuna::search::{lookahead_score, positional_move};
use jatsuna::{select_move, Difficulty};
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::{play_game, small_config};

#[test]
fn test_standard_opening() {
    let config = Config::standard();
    let board = create_initial_board(&config);

    assert_eq!(board.get(Pos::new(3, 3)), Cell::Wall);
    assert_eq!(board.color_at(Pos::new(2, 3)), Some(Color::Orb));
    assert_eq!(board.color_at(Pos::new(4, 5)), Some(Color::Gem));
    assert_eq!(board.color_at(Pos::new(5, 2)), Some(Color::Stella));

    let moves = legal_moves(&board, Color::Orb, &config);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert!(board.contains(mv.target));
        assert!(board.is_empty(mv.target));
        assert!(mv.is_quiet());
    }
}

#[test]
fn test_flank_converts_through_dominance() {
    let config = Config::standard();
    let board = Board::from_rows(&[
        "OCC....",
        ".......",
        ".......",
        "...#...",
        ".......",
        ".......",
        "......P",
    ])
    .unwrap();
    let mv = find_move(&board, Color::Orb, Pos::new(0, 3), &config).expect("capturing move");
    assert_eq!(mv.capture_count(), 2);

    let after = apply_move(&board, &mv, Color::Orb, &config);
    assert_eq!(after.color_at(Pos::new(0, 1)), Some(Color::Stella));
    assert_eq!(after.color_at(Pos::new(0, 2)), Some(Color::Stella));
    assert_eq!(after.color_at(Pos::new(0, 3)), Some(Color::Orb));
    assert_eq!(board.color_at(Pos::new(0, 1)), Some(Color::Gem), "input board untouched");

    let scores = score(&after);
    assert_eq!(scores.get(Color::Orb), 2);
    assert_eq!(scores.get(Color::Stella), 3);
    assert_eq!(scores.get(Color::Gem), 0);
}

#[test]
fn test_positional_tier_prefers_three_captures() {
    let config = Config::standard();
    let board = Board::from_rows(&["OPPP.", "OP.##", "#####", "#####", "#####"]).unwrap();
    let moves = legal_moves(&board, Color::Orb, &config);
    let three = moves.iter().find(|mv| mv.capture_count() == 3).unwrap();
    let one = moves.iter().find(|mv| mv.capture_count() == 1).unwrap();

    assert!(
        lookahead_score(&board, three, Color::Orb, &Heuristic, &config)
            > lookahead_score(&board, one, Color::Orb, &Heuristic, &config)
    );
    assert_eq!(positional_move(&board, Color::Orb, &Heuristic, &config).as_ref(), Some(three));
}

#[test]
fn test_coalition_utility_rewards_pressure() {
    let config = Config::standard();
    let quiet = Board::from_rows(&[
        ".......",
        ".......",
        "..C....",
        "...#...",
        "...O...",
        ".......",
        "P......",
    ])
    .unwrap();
    // one Gem stone next to the Orb, open on the far side
    let threatened = Board::from_rows(&[
        ".......",
        ".......",
        "..C....",
        "...#...",
        "..CO...",
        ".......",
        "P......",
    ])
    .unwrap();
    let base = CoalitionTerms::collect(&quiet, Color::Orb, Color::Gem, &config);
    let more = CoalitionTerms::collect(&threatened, Color::Orb, Color::Gem, &config);
    assert_eq!(base.capture_pressure, 0);
    assert_eq!(more.capture_pressure, 1);

    let fixed = |pressure| CoalitionTerms { capture_pressure: pressure, ..base }.total();
    assert!(fixed(1) > fixed(0));
    assert!(fixed(2) > fixed(1));
}

#[test]
fn test_every_tier_returns_none_when_stuck() {
    let config = Config::standard();
    let full = Board::from_rows(&["OCP", "PCO", "CO#"]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    for difficulty in Difficulty::ALL {
        assert!(select_move(&full, Color::Gem, difficulty, 2, &config, &mut rng).is_none());
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let config = Config::standard();
    let seats = [Difficulty::Weak, Difficulty::Easy, Difficulty::Medium];
    let (a, history_a) = play_game(&config, seats, 0, 99);
    let (b, history_b) = play_game(&config, seats, 0, 99);
    assert_eq!(history_a, history_b);
    assert_eq!(a.scores(), b.scores());
}

#[test]
fn test_full_game_terminates_and_ranks() {
    for layout in Layout::ALL {
        let config = Config::standard().with_setup(layout.setup(true)).unwrap();
        let initial_empty = create_initial_board(&config).empty_count() as u32;
        let (game, history) = play_game(
            &config,
            [Difficulty::Medium, Difficulty::Positional, Difficulty::Hard],
            0,
            5,
        );

        assert!(game.is_over(&config));
        assert!(game.turn().turn_count <= initial_empty + 3);
        assert!(game.board().is_full());
        assert_eq!(history.len() as u32, game.turn().turn_count + 1);

        let ranking = game.ranking(&config);
        assert_eq!(ranking.len(), 3);
        assert_eq!(ranking[0].rank, 1);
        assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(
            ranking.iter().map(|s| s.score).sum::<u32>() as usize,
            game.board().stone_count()
        );
    }
}

#[test]
fn test_coalition_game_on_small_board() {
    let config = small_config();
    let (game, history) = play_game(
        &config,
        [Difficulty::Easy, Difficulty::Coalition, Difficulty::Coalition],
        0,
        17,
    );
    assert!(game.is_over(&config));
    for pair in history.windows(2) {
        // walls never move
        assert_eq!(pair[0].get(Pos::new(2, 2)), Cell::Wall);
        assert_eq!(pair[1].get(Pos::new(2, 2)), Cell::Wall);
    }
}
