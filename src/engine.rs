//! Engine facade over the alpha-beta searcher
//!
//! The engine always plays `X` and maximizes. It owns a [`Searcher`] and
//! adds timing and logging around each search.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board3, Engine, Pos};
//!
//! let mut engine = Engine::new();
//! let board: Board3 = "X../OO./..X".parse().unwrap();
//!
//! let result = engine.best_move_with_stats(&board);
//! assert_eq!(result.best_move, Some(Pos::new(1, 2)));
//! println!("score {} in {} nodes", result.score, result.nodes);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Pos};
use crate::search::{SearchResult, Searcher};

/// Search depth used unless configured otherwise, for both board sizes
pub const DEFAULT_MAX_DEPTH: u8 = 3;

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` when the board is full
    pub best_move: Option<Pos>,
    /// Search value of the chosen move
    pub score: i32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of pruned branches
    pub cutoffs: u64,
    /// Wall-clock search time
    pub elapsed: Duration,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, elapsed: Duration) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            nodes: result.nodes,
            cutoffs: result.cutoffs,
            elapsed,
        }
    }

    /// Move as signed `(row, col)`, with `(-1, -1)` meaning no move.
    pub fn coords(&self) -> (i32, i32) {
        match self.best_move {
            Some(pos) => (i32::from(pos.row), i32::from(pos.col)),
            None => (-1, -1),
        }
    }

    /// Search time in milliseconds
    #[inline]
    pub fn time_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }
}

/// Tic-tac-toe engine playing `X`.
#[derive(Debug, Clone)]
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    /// Engine searching to [`DEFAULT_MAX_DEPTH`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_MAX_DEPTH)
    }

    /// Engine with a custom search depth.
    ///
    /// A depth of 0 plays purely from the heuristic after one ply.
    #[must_use]
    pub fn with_depth(max_depth: u8) -> Self {
        Self {
            searcher: Searcher::new(max_depth),
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }

    pub fn set_max_depth(&mut self, max_depth: u8) {
        self.searcher.set_max_depth(max_depth);
    }

    /// Best move for the engine, or `None` if `board` is full.
    #[must_use]
    pub fn best_move<const N: usize>(&mut self, board: &Board<N>) -> Option<Pos> {
        self.best_move_with_stats(board).best_move
    }

    /// Best move together with the search statistics.
    ///
    /// `board` is not modified; the search runs on a private copy.
    #[must_use]
    pub fn best_move_with_stats<const N: usize>(&mut self, board: &Board<N>) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board);
        let result = MoveResult::from_search(result, start.elapsed());

        debug!(
            size = N,
            depth = self.max_depth(),
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            cutoffs = result.cutoffs,
            elapsed_us = result.elapsed.as_micros() as u64,
            "engine search finished"
        );

        result
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Best engine move on `board` at the default depth.
///
/// ```
/// use tictactoe::{best_move, Board3, Pos};
///
/// let board: Board3 = "XX./.O./O..".parse().unwrap();
/// assert_eq!(best_move(&board), Some(Pos::new(0, 2)));
///
/// let full: Board3 = "XOX/XOO/OXX".parse().unwrap();
/// assert_eq!(best_move(&full), None);
/// ```
#[must_use]
pub fn best_move<const N: usize>(board: &Board<N>) -> Option<Pos> {
    Engine::new().best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board3, Board4};

    #[test]
    fn test_engine_creation() {
        let engine = Engine::new();
        assert_eq!(engine.max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_engine_with_depth() {
        let mut engine = Engine::with_depth(1);
        assert_eq!(engine.max_depth(), 1);
        engine.set_max_depth(5);
        assert_eq!(engine.max_depth(), 5);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let board: Board3 = "XX./O../..O".parse().unwrap();
        let mut engine = Engine::new();
        let result = engine.best_move_with_stats(&board);
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 100);
        assert_eq!(result.coords(), (0, 2));
    }

    #[test]
    fn test_engine_blocks_four_by_four() {
        let board: Board4 = "X.X./OOO./...X/....".parse().unwrap();
        assert_eq!(best_move(&board), Some(Pos::new(1, 3)));
    }

    #[test]
    fn test_engine_wins_four_by_four() {
        let board: Board4 = "XXX./.OO./O.../....".parse().unwrap();
        assert_eq!(best_move(&board), Some(Pos::new(0, 3)));
    }

    #[test]
    fn test_engine_empty_board() {
        assert_eq!(best_move(&Board3::new()), Some(Pos::new(1, 1)));
        assert_eq!(best_move(&Board4::new()), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_time_ms_truncates() {
        let search = SearchResult {
            best_move: None,
            score: 0,
            nodes: 0,
            cutoffs: 0,
        };
        let result = MoveResult::from_search(search, Duration::from_micros(2_750));
        assert_eq!(result.time_ms(), 2);
    }

    #[test]
    fn test_full_board_sentinel() {
        let board: Board3 = "XOX/XOO/OXX".parse().unwrap();
        let result = Engine::new().best_move_with_stats(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.coords(), (-1, -1));
    }

    #[test]
    fn test_engine_does_not_modify_board() {
        let board: Board3 = "X../.O./...".parse().unwrap();
        let copy = board;
        let _ = best_move(&board);
        assert_eq!(board, copy);
    }
}
