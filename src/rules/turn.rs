//! Turn cycle and termination
//!
//! Colors move in seat order. A color without legal moves passes; once every
//! seat has passed in a row the game is over. Quiet placements stay legal
//! while any cell is empty, so passes only happen on a full board and a game
//! lasts at most (empty cells at start) + 3 turns.

use crate::board::{Board, Color};
use crate::config::Config;

use super::moves::{apply_move, create_initial_board, legal_moves, Move};
use super::score::{score, Scores, Standing};

/// Whose turn it is and how many passes happened in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    /// Seat of the color to move
    pub seat: usize,
    pub consecutive_passes: usize,
    /// Turns taken so far, passes included
    pub turn_count: u32,
}

impl TurnState {
    /// A stone was placed: pass streak resets, next seat moves
    pub fn record_move(&mut self, player_count: usize) {
        self.consecutive_passes = 0;
        self.advance(player_count);
    }

    /// The seat had nothing to play
    pub fn record_pass(&mut self, player_count: usize) {
        self.consecutive_passes += 1;
        self.advance(player_count);
    }

    #[inline]
    pub fn is_terminal(&self, player_count: usize) -> bool {
        self.consecutive_passes >= player_count
    }

    fn advance(&mut self, player_count: usize) {
        self.seat = (self.seat + 1) % player_count;
        self.turn_count += 1;
    }
}

/// What happened on one call to [`GameState::play`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved { color: Color, mv: Move },
    Passed { color: Color },
}

/// Board plus turn bookkeeping. Holds no presentation state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: TurnState,
}

impl GameState {
    /// Starting position from `config`, first seat to move
    pub fn new(config: &Config) -> Self {
        Self::from_board(create_initial_board(config))
    }

    /// Resume from an arbitrary board with the first seat to move
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            turn: TurnState::default(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Seat of the color to move
    #[inline]
    pub fn current_seat(&self) -> usize {
        self.turn.seat
    }

    #[inline]
    pub fn current_color(&self, config: &Config) -> Color {
        config.color_at_seat(self.turn.seat)
    }

    /// Legal moves of the color to move
    pub fn legal_moves(&self, config: &Config) -> Vec<Move> {
        legal_moves(&self.board, self.current_color(config), config)
    }

    #[inline]
    pub fn is_over(&self, config: &Config) -> bool {
        self.turn.is_terminal(config.player_count())
    }

    /// Play one turn for the color to move: `Some(mv)` places a stone,
    /// `None` passes.
    ///
    /// # Panics
    /// If the game is over, or if `mv` is not legal for the color to move,
    /// or if a pass is requested while legal moves exist.
    pub fn play(&mut self, mv: Option<Move>, config: &Config) -> TurnOutcome {
        assert!(!self.is_over(config), "game is already over");
        let color = self.current_color(config);
        let legal = legal_moves(&self.board, color, config);

        match mv {
            Some(mv) => {
                assert!(legal.contains(&mv), "{:?} is not a legal move for {:?}", mv, color);
                self.board = apply_move(&self.board, &mv, color, config);
                self.turn.record_move(config.player_count());
                TurnOutcome::Moved { color, mv }
            }
            None => {
                assert!(legal.is_empty(), "{:?} has legal moves and cannot pass", color);
                self.turn.record_pass(config.player_count());
                TurnOutcome::Passed { color }
            }
        }
    }

    #[inline]
    pub fn scores(&self) -> Scores {
        score(&self.board)
    }

    /// Final standings in seat order for ties
    pub fn ranking(&self, config: &Config) -> Vec<Standing> {
        self.scores().ranking(config.players())
    }
}
