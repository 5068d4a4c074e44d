//! Line enumeration
//!
//! An `N x N` board has `2N + 2` lines: every row, every column and the two
//! diagonals. Lines are yielded row `i`, column `i` for each `i`, then the
//! main diagonal and the anti-diagonal.

use crate::board::Pos;

/// The `N` cells of one row, column or diagonal
pub type Line<const N: usize> = [Pos; N];

#[inline]
pub fn row<const N: usize>(r: usize) -> Line<N> {
    std::array::from_fn(|c| Pos::new(r as u8, c as u8))
}

#[inline]
pub fn column<const N: usize>(c: usize) -> Line<N> {
    std::array::from_fn(|r| Pos::new(r as u8, c as u8))
}

/// Top-left to bottom-right
#[inline]
pub fn main_diagonal<const N: usize>() -> Line<N> {
    std::array::from_fn(|i| Pos::new(i as u8, i as u8))
}

/// Top-right to bottom-left
#[inline]
pub fn anti_diagonal<const N: usize>() -> Line<N> {
    std::array::from_fn(|i| Pos::new(i as u8, (N - 1 - i) as u8))
}

/// All `2N + 2` lines of the board
pub fn lines<const N: usize>() -> impl Iterator<Item = Line<N>> {
    (0..N)
        .flat_map(|i| [row::<N>(i), column::<N>(i)])
        .chain([main_diagonal::<N>(), anti_diagonal::<N>()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_line_count() {
        assert_eq!(lines::<3>().count(), 8);
        assert_eq!(lines::<4>().count(), 10);
    }

    #[test]
    fn test_lines_are_distinct() {
        let set: HashSet<Line<4>> = lines::<4>().collect();
        assert_eq!(set.len(), 10);
    }

    #[test]
    fn test_diagonals() {
        assert_eq!(
            main_diagonal::<3>(),
            [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]
        );
        assert_eq!(
            anti_diagonal::<4>(),
            [Pos::new(0, 3), Pos::new(1, 2), Pos::new(2, 1), Pos::new(3, 0)]
        );
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(row::<3>(1), [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);
        assert_eq!(column::<3>(2), [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)]);
    }

    #[test]
    fn test_every_cell_covered() {
        let mut seen = [[0u8; 4]; 4];
        for line in lines::<4>() {
            for pos in line {
                seen[pos.row as usize][pos.col as usize] += 1;
            }
        }
        // Every cell sits on its row and column; diagonal cells on one more
        assert_eq!(seen[0][0], 3);
        assert_eq!(seen[0][1], 2);
        assert_eq!(seen[1][2], 3);
    }
}
