//! Jatsuna: a three-color flanking board game engine
//!
//! Three colors take turns placing stones on a square grid with optional
//! walls:
//! - A placement flanks every run of non-own stones closed by an own stone
//! - Flanked stones change color through a non-transitive dominance table,
//!   so each color feeds one rival and starves the other
//! - When any capture exists, only capturing placements are legal
//! - A color without legal moves passes; three passes in a row end the game
//! - Score is the number of cells a color holds
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Grid, colors and coordinates
//! - [`config`]: Validated, serialisable game configuration
//! - [`rules`]: Captures, legal moves, state transition, scoring, turn cycle
//! - [`eval`]: Per-color heuristic and the coalition utility
//! - [`search`]: Shallow tiers and depth-bounded alpha-beta
//! - [`engine`]: Difficulty dispatch and the [`AIEngine`] player
//!
//! # Quick Start
//!
//! ```
//! use jatsuna::{AIEngine, Config, Difficulty, GameState};
//!
//! let config = Config::standard();
//! let mut game = GameState::new(&config);
//! let mut engine = AIEngine::new(Difficulty::Medium, 42);
//!
//! while !game.is_over(&config) {
//!     let color = game.current_color(&config);
//!     let mv = engine.get_move(game.board(), color, 0, &config);
//!     game.play(mv, &config);
//! }
//!
//! for standing in game.ranking(&config) {
//!     println!("{}. {} with {}", standing.rank, standing.color, standing.score);
//! }
//! ```
//!
//! All functions are pure over immutable inputs: boards are owned values,
//! configuration is passed explicitly and randomness comes from a caller-owned
//! `Rng`.

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Pos, BOARD_SIZE, MAX_BOARD_SIZE};
pub use config::{Config, ConfigError, DominanceTable, Layout, SearchConfig, Setup};
pub use engine::{select_move, AIEngine, Difficulty, MoveResult, SearchType};
pub use rules::{apply_move, create_initial_board, legal_moves, score, GameState, Move, Scores};
