//! Move ordering
//!
//! Candidate cells are scored before search so that alpha-beta sees the
//! strongest moves first. Priorities only change which branches get pruned
//! and which of several equal-valued moves is kept; they never change the
//! minimax value of a position.

use crate::board::{Board, Mark, Pos};
use crate::eval::Score;
use crate::rules::completes_line;

/// Cells that earn the positional bonus.
///
/// These are the same four cells on every board size; on 3x3 three of them
/// sit on the lower-right edge.
pub const CENTER_CELLS: [Pos; 4] = [
    Pos { row: 1, col: 1 },
    Pos { row: 1, col: 2 },
    Pos { row: 2, col: 1 },
    Pos { row: 2, col: 2 },
];

/// Direction vectors for adjacency walks (4 directions, both signs walked)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// A candidate move with its ordering priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub priority: i32,
}

/// Score an empty cell for ordering purposes.
///
/// Priority ladder:
/// 1. Engine completes a line here: `WINNING_MOVE`
/// 2. Human would complete a line here: `BLOCKING_MOVE`
/// 3. Otherwise the central bonus plus the adjacency walk score
pub fn move_priority<const N: usize>(board: &Board<N>, pos: Pos) -> i32 {
    if completes_line(board, pos, Mark::Engine) {
        return Score::WINNING_MOVE;
    }
    if completes_line(board, pos, Mark::Human) {
        return Score::BLOCKING_MOVE;
    }

    let mut priority = 0;
    if CENTER_CELLS.contains(&pos) {
        priority += Score::CENTER_BONUS;
    }

    for (dr, dc) in DIRECTIONS {
        let line_score: i32 = [-1, 1]
            .into_iter()
            .map(|sign| walk_score(board, pos, dr * sign, dc * sign))
            .sum();
        priority += line_score * Score::DIRECTION_WEIGHT;
    }

    priority
}

/// Walk up to `N - 1` cells from `pos`, stopping at the edge or at the
/// first human mark.
fn walk_score<const N: usize>(board: &Board<N>, pos: Pos, dr: i32, dc: i32) -> i32 {
    let mut score = 0;
    for k in 1..N as i32 {
        let Some(next) = pos.offset(dr, dc, k, N) else {
            break;
        };
        match board.get(next) {
            Mark::Engine => score += Score::NEIGHBOR_OWN,
            Mark::Empty => score += Score::NEIGHBOR_EMPTY,
            Mark::Human => break,
        }
    }
    score
}

/// All empty cells, highest priority first.
///
/// The sort is stable, so equal priorities keep row-major order.
pub fn ordered_moves<const N: usize>(board: &Board<N>) -> Vec<ScoredMove> {
    let mut scored: Vec<ScoredMove> = Vec::with_capacity(N * N);
    scored.extend(board.empty_cells().map(|pos| ScoredMove {
        pos,
        priority: move_priority(board, pos),
    }));
    scored.sort_by(|a, b| b.priority.cmp(&a.priority));
    scored
}
