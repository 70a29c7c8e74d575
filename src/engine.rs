//! Main AI engine dispatching over difficulty tiers
//!
//! Every tier maps `(board, color, config, human seat, rng)` to a move, or
//! `None` when the color has to pass:
//!
//! 1. **Weak**: mostly the least damaging move, sometimes a random one
//! 2. **Easy**: uniform random
//! 3. **Medium**: greedy on captures and corners
//! 4. **Positional**: one-ply lookahead on the heuristic
//! 5. **Hard / SuperHard**: alpha-beta, acting color against both rivals
//! 6. **Coalition**: alpha-beta where the two AI seats share one utility
//!    against the human seat
//!
//! # Example
//!
//! ```
//! use jatsuna::{AIEngine, Color, Config, Difficulty};
//! use jatsuna::rules::create_initial_board;
//!
//! let config = Config::standard();
//! let board = create_initial_board(&config);
//!
//! let mut engine = AIEngine::new(Difficulty::Hard, 7);
//! let result = engine.get_move_with_stats(&board, Color::Gem, 0, &config);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Nodes: {}", result.nodes);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};
use crate::config::Config;
use crate::eval::{Coalition, Heuristic};
use crate::rules::Move;
use crate::search::{
    greedy_move, positional_move_with_score, random_move, weak_move, SearchResult, Searcher,
};

/// AI strength, weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Weak,
    Easy,
    Medium,
    Positional,
    Hard,
    SuperHard,
    #[serde(alias = "collusion")]
    Coalition,
}

impl Difficulty {
    pub const ALL: [Difficulty; 7] = [
        Difficulty::Weak,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Positional,
        Difficulty::Hard,
        Difficulty::SuperHard,
        Difficulty::Coalition,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Weak => "weak",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Positional => "positional",
            Difficulty::Hard => "hard",
            Difficulty::SuperHard => "superhard",
            Difficulty::Coalition => "coalition",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}'")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "collusion" {
            return Ok(Difficulty::Coalition);
        }
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == key)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// No legal move; the color passes
    Pass,
    Random,
    Weak,
    Greedy,
    /// One-ply lookahead
    OnePly,
    /// Alpha-beta, acting color against both rivals
    AlphaBeta,
    /// Alpha-beta on the coalition utility
    Coalition,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` means pass
    pub best_move: Option<Move>,
    /// Score of the chosen move under the tier's own measure, 0 when the
    /// tier keeps none
    pub score: f64,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn pass(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0.0,
            search_type: SearchType::Pass,
            time_ms,
            nodes: 1,
        }
    }

    #[inline]
    fn shallow(
        best_move: Option<Move>,
        score: f64,
        search_type: SearchType,
        time_ms: u64,
        nodes: u64,
    ) -> Self {
        Self {
            best_move,
            score,
            search_type,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Pick a move for `color` at the given difficulty.
///
/// `human_seat` only matters to [`Difficulty::Coalition`]; it names the seat
/// the two AI colors gang up on. Returns `None` when `color` has no legal
/// move. The board is never modified.
///
/// # Panics
/// If `human_seat` is not a seat of `config`.
pub fn select_move<R>(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    human_seat: usize,
    config: &Config,
    rng: &mut R,
) -> Option<Move>
where
    R: Rng + ?Sized,
{
    select_move_with_stats(board, color, difficulty, human_seat, config, rng).best_move
}

/// [`select_move`] plus score, search type, timing and node count.
pub fn select_move_with_stats<R>(
    board: &Board,
    color: Color,
    difficulty: Difficulty,
    human_seat: usize,
    config: &Config,
    rng: &mut R,
) -> MoveResult
where
    R: Rng + ?Sized,
{
    let start = Instant::now();
    let human = config.color_at_seat(human_seat);
    let search = config.search();

    let result = match difficulty {
        Difficulty::Easy => {
            let mv = random_move(board, color, config, rng);
            MoveResult::shallow(mv, 0.0, SearchType::Random, elapsed_ms(start), 1)
        }
        Difficulty::Weak => {
            let mv = weak_move(board, color, config, rng);
            MoveResult::shallow(mv, 0.0, SearchType::Weak, elapsed_ms(start), 1)
        }
        Difficulty::Medium => {
            let mv = greedy_move(board, color, config, rng);
            MoveResult::shallow(mv, 0.0, SearchType::Greedy, elapsed_ms(start), 1)
        }
        Difficulty::Positional => {
            let (mv, score) = match positional_move_with_score(board, color, &Heuristic, config) {
                Some((mv, score)) => (Some(mv), score),
                None => (None, 0.0),
            };
            MoveResult::shallow(mv, score, SearchType::OnePly, elapsed_ms(start), 1)
        }
        Difficulty::Hard => {
            let mut searcher =
                Searcher::paranoid(&Heuristic, config, color, search.hard_depth, search.minimax_breadth);
            let result = searcher.search(board, color);
            MoveResult::from_search(result, SearchType::AlphaBeta, elapsed_ms(start))
        }
        Difficulty::SuperHard => superhard(board, color, config, start),
        Difficulty::Coalition if color == human => {
            debug!("coalition asked to move for the human color {}, using superhard", color);
            superhard(board, color, config, start)
        }
        Difficulty::Coalition => {
            let evaluator = Coalition { human };
            let mut searcher = Searcher::coalition(
                &evaluator,
                config,
                color,
                human,
                search.coalition_depth,
                search.coalition_breadth,
            );
            let result = searcher.search(board, color);
            MoveResult::from_search(result, SearchType::Coalition, elapsed_ms(start))
        }
    };

    let result = match result.best_move {
        Some(_) => result,
        None => MoveResult::pass(result.time_ms),
    };
    debug!(
        "{} ({}) -> {:?} score {:.2} via {:?}, {} nodes in {}ms",
        color,
        difficulty,
        result.best_move.as_ref().map(|mv| mv.target),
        result.score,
        result.search_type,
        result.nodes,
        result.time_ms
    );
    result
}

fn superhard(board: &Board, color: Color, config: &Config, start: Instant) -> MoveResult {
    let search = config.search();
    let mut searcher =
        Searcher::paranoid(&Heuristic, config, color, search.superhard_depth, search.minimax_breadth);
    let result = searcher.search(board, color);
    MoveResult::from_search(result, SearchType::AlphaBeta, elapsed_ms(start))
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// AI player owning its difficulty and random source.
///
/// # Example
///
/// ```
/// use jatsuna::{AIEngine, Color, Config, Difficulty};
/// use jatsuna::rules::create_initial_board;
///
/// let config = Config::standard();
/// let board = create_initial_board(&config);
/// let mut engine = AIEngine::new(Difficulty::Medium, 42);
///
/// if let Some(mv) = engine.get_move(&board, Color::Orb, 0, &config) {
///     println!("Play at {}", mv.target);
/// }
/// ```
pub struct AIEngine {
    difficulty: Difficulty,
    rng: StdRng,
}

impl AIEngine {
    /// Engine with a seeded random source; equal seeds replay equal games.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Engine seeded from the operating system
    pub fn from_entropy(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Get the move for `color`, `None` to pass.
    pub fn get_move(
        &mut self,
        board: &Board,
        color: Color,
        human_seat: usize,
        config: &Config,
    ) -> Option<Move> {
        self.get_move_with_stats(board, color, human_seat, config).best_move
    }

    #[must_use]
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        color: Color,
        human_seat: usize,
        config: &Config,
    ) -> MoveResult {
        select_move_with_stats(board, color, self.difficulty, human_seat, config, &mut self.rng)
    }
}
