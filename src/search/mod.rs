//! Search module for the Jatsuna AI
//!
//! Contains:
//! - Shallow tiers: random, weak, greedy and one-ply lookahead
//! - Depth-bounded alpha-beta over Max/Min roles, shared by the minimax and
//!   coalition tiers

pub mod alphabeta;
pub mod strategy;

pub use alphabeta::{MoveOrder, Role, Roles, SearchResult, SearchStats, Searcher};
pub use strategy::{
    greedy_move, lookahead_score, positional_move, positional_move_with_score, random_move, weak_move,
};
