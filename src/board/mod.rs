//! Board representation for 3x3 and 4x4 tic-tac-toe

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Board3, Board4};

/// Largest supported board edge (4x4 variant)
pub const MAX_BOARD_SIZE: usize = 4;

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    /// User-controlled side (`O`)
    Human,
    /// Computer-controlled side (`X`)
    Engine,
}

impl Mark {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Human => Mark::Engine,
            Mark::Engine => Mark::Human,
            Mark::Empty => Mark::Empty,
        }
    }

    /// +1 for the engine, -1 for the human, 0 for empty cells.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Mark::Engine => 1,
            Mark::Human => -1,
            Mark::Empty => 0,
        }
    }

    /// Character used by the textual board format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::Engine => 'X',
            Mark::Human => 'O',
            Mark::Empty => '.',
        }
    }

    /// Parse a cell character (`X`, `O`, `.` or `-`)
    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::Engine),
            'O' | 'o' => Some(Mark::Human),
            '.' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::Engine => write!(f, "X"),
            Mark::Human => write!(f, "O"),
            Mark::Empty => write!(f, " "),
        }
    }
}

/// Position on the board.
///
/// Ordering is row-major, which is also the enumeration order of empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32, size: usize) -> bool {
        row >= 0 && row < size as i32 && col >= 0 && col < size as i32
    }

    /// Checked conversion from signed coordinates.
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Self> {
        if Self::is_valid(row, col, size) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Step `k` cells along `(dr, dc)`, or `None` past the edge.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32, size: usize) -> Option<Self> {
        Self::checked(
            i32::from(self.row) + dr * k,
            i32::from(self.col) + dc * k,
            size,
        )
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
