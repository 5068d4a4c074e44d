//! Fixed-size board shared by the 3x3 and 4x4 variants

use std::fmt;
use std::str::FromStr;

use super::{Mark, Pos, MAX_BOARD_SIZE};
use crate::error::Error;

/// Game board of `N x N` cells.
///
/// The board is a plain `Copy` value. Search mutates a single working copy
/// in place (place, recurse, clear) so no allocation happens per node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Mark; N]; N],
}

/// Classic 3x3 board
pub type Board3 = Board<3>;
/// 4x4 variant
pub type Board4 = Board<4>;

impl<const N: usize> Board<N> {
    pub fn new() -> Self {
        debug_assert!(N >= 3 && N <= MAX_BOARD_SIZE, "unsupported board size {}", N);
        Self {
            cells: [[Mark::Empty; N]; N],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        N
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Place a mark (no legality checks).
    /// Use `rules::apply_human_move` for validated input.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.row as usize][pos.col as usize] = mark;
    }

    /// Reset a cell to empty - used to undo a search placement
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.cells[pos.row as usize][pos.col as usize] = Mark::Empty;
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..N * N)
            .map(|idx| Pos::from_index(idx, N))
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&m| m == mark).count()
    }

    /// Total marks on board
    #[inline]
    pub fn filled_count(&self) -> usize {
        N * N - self.count(Mark::Empty)
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&m| m != Mark::Empty)
    }

    /// Check if board has no marks
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&m| m == Mark::Empty)
    }

    /// Board with every engine mark turned into a human mark and vice versa
    pub fn swapped(&self) -> Self {
        let mut out = *self;
        for cell in out.cells.iter_mut().flatten() {
            *cell = cell.opponent();
        }
        out
    }

    /// Compact textual form, e.g. `XX./.O./O..`
    pub fn to_notation(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|m| m.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FromStr for Board<N> {
    type Err = Error;

    /// Parse rows separated by `/` (or newlines); `X` engine, `O` human, `.` empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != N {
            return Err(Error::InvalidBoardShape {
                expected: N,
                context: s.to_string(),
            });
        }

        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != N {
                return Err(Error::InvalidBoardShape {
                    expected: N,
                    context: s.to_string(),
                });
            }
            for (c, &ch) in chars.iter().enumerate() {
                let mark = Mark::from_symbol(ch).ok_or_else(|| Error::InvalidCellCharacter {
                    character: ch,
                    row: r,
                    col: c,
                })?;
                board.place(Pos::new(r as u8, c as u8), mark);
            }
        }
        Ok(board)
    }
}

/// Console rendering with 1-based coordinates:
///
/// ```text
///     1   2   3
/// 1 | X | O |   |
///   +---+---+---+
/// ```
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..N {
            write!(f, " {}  ", col + 1)?;
        }
        writeln!(f)?;

        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{} |", r + 1)?;
            for mark in row {
                write!(f, " {} |", mark)?;
            }
            writeln!(f)?;
            if r + 1 < N {
                write!(f, "  +")?;
                for _ in 0..N {
                    write!(f, "---+")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
