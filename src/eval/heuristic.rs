//! Heuristic evaluation function for non-terminal positions
//!
//! Every line that only one side has played into is worth
//! `10^(marks in the line)` to that side. Lines holding both marks, or no
//! marks, are dead and score nothing. The total is taken from the engine's
//! point of view, so it is antisymmetric under swapping the two sides.

use crate::board::{Board, Mark};
use crate::rules::{lines, Line};

use super::scores::Score;

/// Evaluate the board from the engine's perspective.
///
/// Returns a score where:
/// - Positive values indicate advantage for the engine
/// - Negative values indicate advantage for the human
///
/// Only called at the depth cutoff, after terminal positions have been
/// ruled out, so no win detection is done here.
#[must_use]
pub fn evaluate<const N: usize>(board: &Board<N>) -> i32 {
    lines::<N>().map(|line| evaluate_line(board, &line)).sum()
}

/// Control score of a single line.
#[must_use]
pub fn evaluate_line<const N: usize>(board: &Board<N>, line: &Line<N>) -> i32 {
    let mut engine = 0u32;
    let mut human = 0u32;
    for &pos in line {
        match board.get(pos) {
            Mark::Engine => engine += 1,
            Mark::Human => human += 1,
            Mark::Empty => {}
        }
    }

    match (engine, human) {
        (0, 0) => 0,
        (e, 0) => Score::LINE_BASE.pow(e),
        (0, h) => -Score::LINE_BASE.pow(h),
        _ => 0,
    }
}
