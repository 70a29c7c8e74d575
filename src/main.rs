//! Jatsuna self-play runner
//!
//! Plays one game between three AI seats in the terminal and prints the
//! final ranking.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use jatsuna::{AIEngine, Config, Difficulty, GameState, Layout};
use jatsuna::rules::TurnOutcome;

#[derive(Parser, Debug)]
#[command(name = "jatsuna", about = "Three-color flanking game, AI self-play")]
struct Args {
    /// Difficulty of each seat in turn order
    #[arg(long, value_delimiter = ',', default_values_t = [Difficulty::Medium, Difficulty::Positional, Difficulty::Hard])]
    seats: Vec<Difficulty>,

    /// Seat the coalition seats play against
    #[arg(long, default_value_t = 0)]
    human_seat: usize,

    /// Seed for every seat's random source (seat index is added)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting layout: wide-triangle, tight-triangle, edge-start, diagonal
    #[arg(long)]
    layout: Option<Layout>,

    /// Leave out the centre wall
    #[arg(long)]
    no_wall: bool,

    /// JSON configuration file; layout flags override its setup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only print the final result
    #[arg(long)]
    quiet: bool,
}

fn load_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => Config::from_json(&fs::read_to_string(path)?)?,
        None => Config::standard(),
    };
    if args.layout.is_some() || args.no_wall {
        let layout = args.layout.unwrap_or_default();
        config = config.with_setup(layout.setup(!args.no_wall))?;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    if args.seats.len() != config.player_count() {
        return Err(format!(
            "expected {} seat difficulties, got {}",
            config.player_count(),
            args.seats.len()
        )
        .into());
    }
    if args.human_seat >= config.player_count() {
        return Err(format!("human seat {} out of range", args.human_seat).into());
    }

    let mut engines: Vec<AIEngine> = args
        .seats
        .iter()
        .enumerate()
        .map(|(seat, &difficulty)| match args.seed {
            Some(seed) => AIEngine::new(difficulty, seed.wrapping_add(seat as u64)),
            None => AIEngine::from_entropy(difficulty),
        })
        .collect();

    let mut game = GameState::new(&config);
    info!(
        "new game: {} vs {} vs {}, coalition target seat {}",
        args.seats[0], args.seats[1], args.seats[2], args.human_seat
    );
    if !args.quiet {
        println!("{}", game.board());
    }

    while !game.is_over(&config) {
        let seat = game.current_seat();
        let color = game.current_color(&config);
        let result = engines[seat].get_move_with_stats(game.board(), color, args.human_seat, &config);

        match game.play(result.best_move, &config) {
            TurnOutcome::Moved { color, mv } if !args.quiet => {
                println!(
                    "turn {:>3}: {} ({}) plays {} [{:?}, {} nodes, {}ms]",
                    game.turn().turn_count,
                    color,
                    engines[seat].difficulty(),
                    mv,
                    result.search_type,
                    result.nodes,
                    result.time_ms
                );
                println!("{}", game.board());
            }
            TurnOutcome::Passed { color } if !args.quiet => {
                println!("turn {:>3}: {} passes", game.turn().turn_count, color);
            }
            _ => {}
        }
    }

    println!("game over after {} turns", game.turn().turn_count);
    for standing in game.ranking(&config) {
        let seat = config.seat_of(standing.color);
        println!(
            "{}. {} ({}) {} stones",
            standing.rank, standing.color, args.seats[seat], standing.score
        );
    }
    Ok(())
}
