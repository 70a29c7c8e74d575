//! Shared fixtures for integration tests

#![allow(dead_code)]

use jatsuna::board::{Board, Color, Pos};
use jatsuna::config::{Config, DominanceTable, Placement, Setup};
use jatsuna::rules::{create_initial_board, GameState};
use jatsuna::{AIEngine, Difficulty};

/// 5x5 board with a centre wall, small enough for deep searches
pub fn small_config() -> Config {
    let setup = Setup {
        stones: vec![
            Placement { pos: Pos::new(1, 2), color: Color::Orb },
            Placement { pos: Pos::new(3, 3), color: Color::Gem },
            Placement { pos: Pos::new(3, 1), color: Color::Stella },
        ],
        walls: vec![Pos::new(2, 2)],
    };
    Config::new(5, Color::ALL, DominanceTable::standard(), setup).unwrap()
}

/// Play a whole game, one engine per seat. Returns the final state and every
/// board seen, starting with the initial one.
pub fn play_game(
    config: &Config,
    seats: [Difficulty; 3],
    human_seat: usize,
    seed: u64,
) -> (GameState, Vec<Board>) {
    let mut engines: Vec<AIEngine> = seats
        .iter()
        .enumerate()
        .map(|(seat, &d)| AIEngine::new(d, seed + seat as u64))
        .collect();
    let mut game = GameState::new(config);
    let mut history = vec![create_initial_board(config)];

    while !game.is_over(config) {
        let seat = game.current_seat();
        let color = game.current_color(config);
        let mv = engines[seat].get_move(game.board(), color, human_seat, config);
        game.play(mv, config);
        history.push(game.board().clone());
    }
    (game, history)
}
