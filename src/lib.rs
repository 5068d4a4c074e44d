//! Tic-tac-toe engine for 3x3 and 4x4 boards
//!
//! A small game-search engine playing `X` against a human `O`:
//! - Square boards of size 3 or 4, one const-generic implementation
//! - A line is won by filling a whole row, column or diagonal
//! - Fixed-depth minimax with alpha-beta pruning (depth 3 by default)
//! - Heuristic move ordering and line-control evaluation at the cutoff
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and textual format
//! - [`rules`]: Lines, terminal detection, move validation
//! - [`eval`]: Position evaluation and score constants
//! - [`search`]: Move ordering and alpha-beta search
//! - [`engine`]: Engine facade with timing and logging
//! - [`game`]: Turn controller used by the front-ends
//! - [`ui`]: egui front-end
//! - [`bridge`]: Bridge and torch puzzle solver
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{apply_human_move, best_move, game_status, Board3, GameStatus, Mark};
//!
//! let mut board = Board3::new();
//! apply_human_move(&mut board, 0, 0).unwrap();
//!
//! // The engine answers in the center
//! let pos = best_move(&board).unwrap();
//! board.place(pos, Mark::Engine);
//! assert_eq!(board.to_notation(), "O../.X./...");
//! assert_eq!(game_status(&board), GameStatus::InProgress);
//! ```

pub mod board;
pub mod bridge;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Board3, Board4, Mark, Pos};
pub use engine::{best_move, Engine, MoveResult, DEFAULT_MAX_DEPTH};
pub use error::{Error, Result};
pub use game::Game;
pub use rules::{apply_human_move, game_status, GameStatus};
