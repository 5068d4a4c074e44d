//! Human move validation

use crate::board::{Board, Mark, Pos};
use crate::error::{Error, InvalidMoveReason, Result};

/// Check that `(row, col)` is on the board and empty.
///
/// Coordinates are 0-based and signed so raw user input can be passed
/// through unchanged.
pub fn validate_move<const N: usize>(board: &Board<N>, row: i32, col: i32) -> Result<Pos> {
    let pos = Pos::checked(row, col, N).ok_or(Error::InvalidMove {
        row,
        col,
        reason: InvalidMoveReason::OutOfBounds,
    })?;
    if !board.is_empty(pos) {
        return Err(Error::InvalidMove {
            row,
            col,
            reason: InvalidMoveReason::Occupied,
        });
    }
    Ok(pos)
}

/// Validate and apply a human move.
///
/// The board is left untouched on error; the caller is expected to ask for
/// another move.
///
/// # Example
///
/// ```
/// use tictactoe::{apply_human_move, Board3, Mark, Pos};
///
/// let mut board = Board3::new();
/// assert!(apply_human_move(&mut board, 1, 1).is_ok());
/// assert_eq!(board.get(Pos::new(1, 1)), Mark::Human);
///
/// // Occupied and off-board cells are rejected
/// assert!(apply_human_move(&mut board, 1, 1).is_err());
/// assert!(apply_human_move(&mut board, 3, 0).is_err());
/// ```
pub fn apply_human_move<const N: usize>(board: &mut Board<N>, row: i32, col: i32) -> Result<Pos> {
    let pos = validate_move(board, row, col)?;
    board.place(pos, Mark::Human);
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board3, Board4};

    #[test]
    fn test_apply_valid_move() {
        let mut board = Board3::new();
        let pos = apply_human_move(&mut board, 0, 2).unwrap();
        assert_eq!(pos, Pos::new(0, 2));
        assert_eq!(board.get(pos), Mark::Human);
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board3::new();
        for (row, col) in [(-1, 0), (0, -1), (3, 0), (0, 3), (-1, -1)] {
            let err = apply_human_move(&mut board, row, col).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidMove {
                    row,
                    col,
                    reason: InvalidMoveReason::OutOfBounds
                }
            );
        }
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_four_by_four_accepts_last_row() {
        let mut board = Board4::new();
        assert!(apply_human_move(&mut board, 3, 3).is_ok());
    }

    #[test]
    fn test_occupied_cell_leaves_board_unchanged() {
        let mut board: Board3 = "X../.../...".parse().unwrap();
        let before = board;
        let err = apply_human_move(&mut board, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                reason: InvalidMoveReason::Occupied,
                ..
            }
        ));
        assert_eq!(board, before);
    }
}
