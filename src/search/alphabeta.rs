//! Alpha-Beta search over a two-role approximation of the three-color game
//!
//! Three colors do not fit negamax: one color's loss is not another's gain.
//! Every color is therefore tagged as a maximizer or a minimizer of a single
//! utility, evaluated from one perspective color at the leaves:
//!
//! - **Paranoid** (`Hard`, `SuperHard`): the acting color maximizes its own
//!   heuristic, both rivals minimize it.
//! - **Coalition**: both AI colors maximize the coalition utility, the human
//!   color minimizes it.
//!
//! Colors move in seat order. A color without legal moves passes, which
//! consumes one ply; three passes in a row inside the tree end the line.
//! Move lists are ordered per role and truncated to a fixed breadth, so the
//! cost of a search is bounded by `breadth ^ depth`.
//!
//! # Example
//!
//! ```
//! use jatsuna::board::Color;
//! use jatsuna::config::Config;
//! use jatsuna::eval::Heuristic;
//! use jatsuna::rules::create_initial_board;
//! use jatsuna::search::Searcher;
//!
//! let config = Config::standard();
//! let board = create_initial_board(&config);
//!
//! let mut searcher = Searcher::paranoid(&Heuristic, &config, Color::Orb, 2, 8);
//! let result = searcher.search(&board, Color::Orb);
//! if let Some(mv) = result.best_move {
//!     println!("Best move: {}", mv);
//! }
//! ```

use log::{debug, trace};

use crate::board::{Board, Color};
use crate::config::Config;
use crate::eval::Evaluator;
use crate::rules::{apply_move, legal_moves, Move};

/// Whether a color pushes the utility up or down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Max,
    Min,
}

/// Role of every color, indexed by [`Color::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles([Role; 3]);

impl Roles {
    /// `acting` maximizes, both rivals minimize
    pub fn paranoid(acting: Color) -> Self {
        let mut roles = [Role::Min; 3];
        roles[acting.index()] = Role::Max;
        Self(roles)
    }

    /// Everyone but `human` maximizes
    pub fn coalition(human: Color) -> Self {
        let mut roles = [Role::Max; 3];
        roles[human.index()] = Role::Min;
        Self(roles)
    }

    #[inline]
    pub fn of(&self, color: Color) -> Role {
        self.0[color.index()]
    }
}

/// How a node's move list is sorted before truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    /// Keep the row-major enumeration order
    Enumeration,
    /// Most stones flanked first
    CaptureCount,
    /// Most stones of the given color flanked first
    CapturesFrom(Color),
}

impl MoveOrder {
    /// Stable sort, so equal keys keep enumeration order.
    pub fn sort(self, moves: &mut [Move]) {
        match self {
            MoveOrder::Enumeration => {}
            MoveOrder::CaptureCount => {
                moves.sort_by_key(|mv| std::cmp::Reverse(mv.capture_count()));
            }
            MoveOrder::CapturesFrom(color) => {
                moves.sort_by_key(|mv| std::cmp::Reverse(mv.captures_of(color)));
            }
        }
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha or beta cutoffs
    pub cutoffs: u64,
    /// Cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Static evaluations performed
    pub leaf_evals: u64,
    /// Forced passes met inside the tree
    pub passes: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the root color has to pass
    pub best_move: Option<Move>,
    /// Backed-up utility of the best move, seen from the perspective color
    pub score: f64,
    /// Plies searched below the root
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Depth- and breadth-bounded alpha-beta searcher.
///
/// Borrowed for the duration of a search; holds no state between calls
/// beyond the counters of the last search.
pub struct Searcher<'a> {
    evaluator: &'a dyn Evaluator,
    config: &'a Config,
    /// Color whose utility is evaluated at the leaves
    perspective: Color,
    roles: Roles,
    max_order: MoveOrder,
    min_order: MoveOrder,
    depth: u8,
    breadth: usize,
    nodes: u64,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    /// Generic constructor. Both roles order by capture count.
    ///
    /// # Panics
    /// If `depth` or `breadth` is zero.
    pub fn new(
        evaluator: &'a dyn Evaluator,
        config: &'a Config,
        perspective: Color,
        roles: Roles,
        depth: u8,
        breadth: usize,
    ) -> Self {
        assert!(depth > 0, "search depth must be positive");
        assert!(breadth > 0, "search breadth must be positive");
        Self {
            evaluator,
            config,
            perspective,
            roles,
            max_order: MoveOrder::CaptureCount,
            min_order: MoveOrder::CaptureCount,
            depth,
            breadth,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// `acting` maximizes its own evaluation against both rivals.
    pub fn paranoid(
        evaluator: &'a dyn Evaluator,
        config: &'a Config,
        acting: Color,
        depth: u8,
        breadth: usize,
    ) -> Self {
        Self::new(evaluator, config, acting, Roles::paranoid(acting), depth, breadth)
    }

    /// `ai` searches on behalf of the coalition against `human`. Coalition
    /// moves try the biggest bites out of the human first; human replies keep
    /// enumeration order.
    ///
    /// # Panics
    /// If `ai == human`.
    pub fn coalition(
        evaluator: &'a dyn Evaluator,
        config: &'a Config,
        ai: Color,
        human: Color,
        depth: u8,
        breadth: usize,
    ) -> Self {
        assert_ne!(ai, human, "the human seat cannot search for the coalition");
        Self::new(evaluator, config, ai, Roles::coalition(human), depth, breadth)
            .with_order(Role::Max, MoveOrder::CapturesFrom(human))
            .with_order(Role::Min, MoveOrder::Enumeration)
    }

    /// Replace the move ordering used at nodes of `role`
    pub fn with_order(mut self, role: Role, order: MoveOrder) -> Self {
        match role {
            Role::Max => self.max_order = order,
            Role::Min => self.min_order = order,
        }
        self
    }

    #[inline]
    pub fn perspective(&self) -> Color {
        self.perspective
    }

    #[inline]
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick a move for `color`. The root always maximizes; the first of
    /// several equally scored moves wins.
    pub fn search(&mut self, board: &Board, color: Color) -> SearchResult {
        self.nodes = 1;
        self.stats = SearchStats::default();

        let mut moves = legal_moves(board, color, self.config);
        if moves.is_empty() {
            let score = self.leaf(board);
            return self.result(None, score);
        }
        self.order(&mut moves, Role::Max);

        let next = self.config.next_color(color);
        let mut alpha = f64::NEG_INFINITY;
        let mut best: Option<(Move, f64)> = None;

        for mv in moves {
            let child = apply_move(board, &mv, color, self.config);
            let value = self.alpha_beta(&child, next, self.depth - 1, alpha, f64::INFINITY, 0);
            trace!("root {} {} -> {:.2}", color, mv, value);

            if best.as_ref().map_or(true, |(_, score)| value > *score) {
                alpha = alpha.max(value);
                best = Some((mv, value));
            }
        }

        let (best_move, score) = match best {
            Some((mv, score)) => (Some(mv), score),
            None => (None, f64::NEG_INFINITY),
        };
        debug!(
            "search {} depth {} breadth {}: {:?} score {:.2} nodes {} cutoffs {}",
            color,
            self.depth,
            self.breadth,
            best_move.as_ref().map(|mv| mv.target),
            score,
            self.nodes,
            self.stats.cutoffs
        );
        self.result(best_move, score)
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        color: Color,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        passes: usize,
    ) -> f64 {
        self.nodes += 1;

        if depth == 0 || passes >= self.config.player_count() {
            return self.leaf(board);
        }

        let next = self.config.next_color(color);
        let mut moves = legal_moves(board, color, self.config);
        if moves.is_empty() {
            self.stats.passes += 1;
            return self.alpha_beta(board, next, depth - 1, alpha, beta, passes + 1);
        }

        let role = self.roles.of(color);
        self.order(&mut moves, role);

        match role {
            Role::Max => {
                let mut value = f64::NEG_INFINITY;
                for (i, mv) in moves.iter().enumerate() {
                    let child = apply_move(board, mv, color, self.config);
                    value = value.max(self.alpha_beta(&child, next, depth - 1, alpha, beta, 0));
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        self.record_cutoff(i);
                        break;
                    }
                }
                value
            }
            Role::Min => {
                let mut value = f64::INFINITY;
                for (i, mv) in moves.iter().enumerate() {
                    let child = apply_move(board, mv, color, self.config);
                    value = value.min(self.alpha_beta(&child, next, depth - 1, alpha, beta, 0));
                    beta = beta.min(value);
                    if alpha >= beta {
                        self.record_cutoff(i);
                        break;
                    }
                }
                value
            }
        }
    }

    #[inline]
    fn leaf(&mut self, board: &Board) -> f64 {
        self.stats.leaf_evals += 1;
        self.evaluator.evaluate(board, self.perspective, self.config)
    }

    fn order(&self, moves: &mut Vec<Move>, role: Role) {
        let order = match role {
            Role::Max => self.max_order,
            Role::Min => self.min_order,
        };
        order.sort(moves);
        moves.truncate(self.breadth);
    }

    #[inline]
    fn record_cutoff(&mut self, move_index: usize) {
        self.stats.cutoffs += 1;
        if move_index == 0 {
            self.stats.first_move_cutoffs += 1;
        }
    }

    fn result(&self, best_move: Option<Move>, score: f64) -> SearchResult {
        SearchResult {
            best_move,
            score,
            depth: self.depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }
}
