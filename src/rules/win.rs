//! Terminal detection
//!
//! Terminal states:
//! 1. One side owns every cell of a row, column or diagonal
//! 2. The board has no empty cell left (draw)
//!
//! Boards where both sides own a full line are unreachable through legal
//! play and are not defended against.

use crate::board::{Board, Mark, Pos};

use super::lines::{anti_diagonal, column, lines, main_diagonal, row, Line};

/// Outcome of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    EngineWins,
    HumanWins,
    Draw,
    InProgress,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Winning side, if any
    #[inline]
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::EngineWins => Some(Mark::Engine),
            GameStatus::HumanWins => Some(Mark::Human),
            GameStatus::Draw | GameStatus::InProgress => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            GameStatus::EngineWins => "engine wins",
            GameStatus::HumanWins => "human wins",
            GameStatus::Draw => "draw",
            GameStatus::InProgress => "in progress",
        };
        write!(f, "{}", text)
    }
}

/// Mark owning every cell of `line`, or `None` if the line is mixed or
/// has an empty cell.
#[inline]
pub fn line_owner<const N: usize>(board: &Board<N>, line: &Line<N>) -> Option<Mark> {
    let first = board.get(line[0]);
    if first == Mark::Empty {
        return None;
    }
    line[1..]
        .iter()
        .all(|&pos| board.get(pos) == first)
        .then_some(first)
}

/// Find a completed line and its owner
pub fn winning_line<const N: usize>(board: &Board<N>) -> Option<(Mark, Line<N>)> {
    lines::<N>().find_map(|line| line_owner(board, &line).map(|owner| (owner, line)))
}

/// Check for a winner
///
/// Returns `Some(mark)` if a side owns a full line, `None` otherwise.
#[inline]
pub fn check_winner<const N: usize>(board: &Board<N>) -> Option<Mark> {
    winning_line(board).map(|(owner, _)| owner)
}

/// Full status query used by the turn controller and the search.
pub fn game_status<const N: usize>(board: &Board<N>) -> GameStatus {
    match check_winner(board) {
        Some(Mark::Engine) => GameStatus::EngineWins,
        Some(Mark::Human) => GameStatus::HumanWins,
        _ if board.is_full() => GameStatus::Draw,
        _ => GameStatus::InProgress,
    }
}

/// Would `mark` at `pos` complete a line through `pos`?
///
/// Only the lines through `pos` are checked (its row, its column and the
/// diagonals it lies on), so no board copy is needed. The cell itself is
/// ignored, letting callers test empty cells.
pub fn completes_line<const N: usize>(board: &Board<N>, pos: Pos, mark: Mark) -> bool {
    let owned = |line: Line<N>| line.iter().all(|&p| p == pos || board.get(p) == mark);

    let (r, c) = (pos.row as usize, pos.col as usize);
    owned(row::<N>(r))
        || owned(column::<N>(c))
        || (r == c && owned(main_diagonal::<N>()))
        || (r + c == N - 1 && owned(anti_diagonal::<N>()))
}
