//! Game rules for N x N tic-tac-toe
//!
//! This module implements the rule set shared by the 3x3 and 4x4 variants:
//! - Line enumeration (rows, columns, both diagonals)
//! - Terminal detection (full line, full board)
//! - Human move validation

pub mod lines;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use lines::{anti_diagonal, column, lines, main_diagonal, row, Line};
pub use moves::{apply_human_move, validate_move};
pub use win::{check_winner, completes_line, game_status, line_owner, winning_line, GameStatus};
