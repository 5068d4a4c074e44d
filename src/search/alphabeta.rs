//! Fixed-depth minimax search with alpha-beta pruning
//!
//! The engine (`X`) is the maximizing side and the human (`O`) the minimizing
//! side. Every node is evaluated in this order:
//!
//! 1. A completed line scores `±(100 - depth)` for its owner
//! 2. A full board scores 0
//! 3. At `depth >= max_depth` the static heuristic is returned
//! 4. Otherwise the empty cells are searched in priority order
//!
//! All moves are made on one work board and undone right after the
//! recursive call returns, so a search never allocates more than the move
//! lists themselves.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board3, Pos};
//! use tictactoe::search::Searcher;
//!
//! let board: Board3 = "XX./.O./O..".parse().unwrap();
//! let mut searcher = Searcher::new(3);
//!
//! let result = searcher.search(&board);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! assert_eq!(result.score, 100);
//! ```

use crate::board::{Board, Mark, Pos};
use crate::eval::{evaluate, terminal_score};
use crate::rules::check_winner;

use super::ordering::ordered_moves;

/// Lower search bound
const NEG_INF: i32 = i32::MIN;
/// Upper search bound
const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` on a full board
    pub best_move: Option<Pos>,
    /// Value of the best move from the engine's point of view
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
    /// Beta/alpha cutoffs taken
    pub cutoffs: u64,
}

/// Depth-limited alpha-beta searcher.
///
/// Node and cutoff counters accumulate across calls to [`alpha_beta`] and
/// [`minimax`]; [`search`] resets them first.
///
/// [`alpha_beta`]: Searcher::alpha_beta
/// [`minimax`]: Searcher::minimax
/// [`search`]: Searcher::search
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher {
    #[must_use]
    pub fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            nodes: 0,
            cutoffs: 0,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, max_depth: u8) {
        self.max_depth = max_depth;
    }

    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    pub fn reset_stats(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }

    /// Find the engine's best move on `board`.
    ///
    /// Each root move is scored by the minimizing branch at depth 0 with the
    /// running alpha and an open beta. Only strictly better moves replace
    /// the current best, so ties go to the higher-priority move.
    #[must_use]
    pub fn search<const N: usize>(&mut self, board: &Board<N>) -> SearchResult {
        self.reset_stats();

        let mut work_board = *board;
        let mut best_move = None;
        let mut best_score = NEG_INF;
        let mut alpha = NEG_INF;

        for candidate in ordered_moves(&work_board) {
            let pos = candidate.pos;
            work_board.place(pos, Mark::Engine);
            let score = self.alpha_beta(&mut work_board, alpha, INF, Mark::Human, 0);
            work_board.clear(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
                alpha = score;
            }
        }

        debug_assert_eq!(&work_board, board, "search must restore the board");

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
            cutoffs: self.cutoffs,
        }
    }

    /// Value of `board` with `to_move` about to play, searched with
    /// alpha-beta pruning.
    ///
    /// `board` is mutated during the search and restored before returning.
    pub fn alpha_beta<const N: usize>(
        &mut self,
        board: &mut Board<N>,
        mut alpha: i32,
        mut beta: i32,
        to_move: Mark,
        depth: u8,
    ) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return score;
        }

        let maximizing = to_move == Mark::Engine;
        let mut best = if maximizing { NEG_INF } else { INF };

        for candidate in ordered_moves(board) {
            let pos = candidate.pos;
            board.place(pos, to_move);
            let score = self.alpha_beta(board, alpha, beta, to_move.opponent(), depth + 1);
            board.clear(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Plain minimax over the same tree, without pruning.
    ///
    /// Slow reference used to check that pruning never changes a value.
    pub fn minimax<const N: usize>(&mut self, board: &mut Board<N>, to_move: Mark, depth: u8) -> i32 {
        self.nodes += 1;

        if let Some(score) = self.leaf_score(board, depth) {
            return score;
        }

        let maximizing = to_move == Mark::Engine;
        let mut best = if maximizing { NEG_INF } else { INF };

        for candidate in ordered_moves(board) {
            let pos = candidate.pos;
            board.place(pos, to_move);
            let score = self.minimax(board, to_move.opponent(), depth + 1);
            board.clear(pos);

            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        best
    }

    /// Score of a node that is not expanded, if any
    #[inline]
    fn leaf_score<const N: usize>(&self, board: &Board<N>, depth: u8) -> Option<i32> {
        if let Some(winner) = check_winner(board) {
            return Some(terminal_score(winner.sign(), depth));
        }
        if board.is_full() {
            return Some(0);
        }
        if depth >= self.max_depth {
            return Some(evaluate(board));
        }
        None
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board3, Board4};

    fn board3(s: &str) -> Board3 {
        s.parse().unwrap()
    }

    #[test]
    fn test_search_empty_board() {
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&Board3::new());
        assert_eq!(result.best_move, Some(Pos::new(1, 1)));
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 264);
    }

    #[test]
    fn test_search_empty_four_by_four() {
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&Board4::new());
        assert_eq!(result.best_move, Some(Pos::new(1, 1)));
        assert_eq!(result.score, -80);
    }

    #[test]
    fn test_search_finds_winning_move() {
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&board3("XX./.O./O.."));
        assert_eq!(result.best_move, Some(Pos::new(0, 2)));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&board3("X../OO./..X"));
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, -97);
    }

    #[test]
    fn test_search_forced_loss_keeps_first_move() {
        // Every reply loses; the block is ordered first and kept.
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&board3("X../OO./..."));
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, -100);
    }

    #[test]
    fn test_search_last_cell() {
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&board3("XOX/XOO/OX."));
        assert_eq!(result.best_move, Some(Pos::new(2, 2)));
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_search_full_board() {
        let mut searcher = Searcher::new(3);
        let result = searcher.search(&board3("XOX/XOO/OXX"));
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_search_restores_board() {
        let board = board3("X../.O./...");
        let mut work = board;
        let mut searcher = Searcher::new(3);
        searcher.alpha_beta(&mut work, NEG_INF, INF, Mark::Human, 0);
        assert_eq!(work, board);
        searcher.minimax(&mut work, Mark::Engine, 0);
        assert_eq!(work, board);
    }

    #[test]
    fn test_terminal_scores_depend_on_depth() {
        let mut board = board3("XXX/OO./...");
        let mut searcher = Searcher::new(3);
        assert_eq!(searcher.alpha_beta(&mut board, NEG_INF, INF, Mark::Human, 0), 100);
        assert_eq!(searcher.alpha_beta(&mut board, NEG_INF, INF, Mark::Human, 2), 98);
    }

    #[test]
    fn test_depth_cutoff_uses_heuristic() {
        let mut board = board3(".../.X./...");
        let mut searcher = Searcher::new(0);
        assert_eq!(searcher.alpha_beta(&mut board, NEG_INF, INF, Mark::Human, 0), 40);
    }

    #[test]
    fn test_pruning_matches_minimax() {
        let cases: [(&str, Mark, i32); 6] = [
            ("X../.O./...", Mark::Human, -110),
            ("X../.O./...", Mark::Engine, 100),
            ("X.O/.X./..O", Mark::Human, -100),
            ("X.O/.X./..O", Mark::Engine, 100),
            (".../.X./...", Mark::Human, 0),
            (".../.X./...", Mark::Engine, 220),
        ];

        for (text, to_move, expected) in cases {
            let mut board = board3(text);

            let mut pruned = Searcher::new(3);
            let pruned_value = pruned.alpha_beta(&mut board, NEG_INF, INF, to_move, 0);

            let mut plain = Searcher::new(3);
            let plain_value = plain.minimax(&mut board, to_move, 0);

            assert_eq!(pruned_value, expected, "{} {:?}", text, to_move);
            assert_eq!(plain_value, expected, "{} {:?}", text, to_move);
            assert!(pruned.nodes() < plain.nodes(), "{} {:?}", text, to_move);
            assert!(pruned.cutoffs() > 0);
            assert_eq!(plain.cutoffs(), 0);
        }
    }

    #[test]
    fn test_node_counts() {
        let mut board = board3("X../.O./...");
        let mut pruned = Searcher::new(3);
        pruned.alpha_beta(&mut board, NEG_INF, INF, Mark::Human, 0);
        assert_eq!(pruned.nodes(), 96);

        let mut plain = Searcher::new(3);
        plain.minimax(&mut board, Mark::Human, 0);
        assert_eq!(plain.nodes(), 260);
    }

    #[test]
    fn test_four_by_four_pruning_matches_minimax() {
        let mut board: Board4 = "X..O/.OX./..../....".parse().unwrap();
        for (to_move, expected) in [(Mark::Human, -170), (Mark::Engine, 170)] {
            let mut pruned = Searcher::new(3);
            let mut plain = Searcher::new(3);
            assert_eq!(pruned.alpha_beta(&mut board, NEG_INF, INF, to_move, 0), expected);
            assert_eq!(plain.minimax(&mut board, to_move, 0), expected);
            assert_eq!(plain.nodes(), 1465);
        }
    }

    #[test]
    fn test_search_resets_counters() {
        let board = board3("XX./O../..O");
        let mut searcher = Searcher::new(3);
        let first = searcher.search(&board);
        let second = searcher.search(&board);
        assert_eq!(first, second);
        assert_eq!(first.best_move, Some(Pos::new(0, 2)));
    }
}
