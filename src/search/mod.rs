//! Search module for the tic-tac-toe engine
//!
//! Contains:
//! - Move ordering (win/block short-circuits, central bonus, adjacency walks)
//! - Fixed-depth alpha-beta search, with an unpruned minimax reference

pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{SearchResult, Searcher};
pub use ordering::{move_priority, ordered_moves, ScoredMove, CENTER_CELLS};
