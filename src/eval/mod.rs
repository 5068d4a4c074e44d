//! Evaluation module for tic-tac-toe positions
//!
//! This module provides static scoring for the search:
//! - Line control (engine-only / human-only lines)
//! - Score constants shared by evaluation, move ordering and search

pub mod heuristic;
pub mod scores;

pub use heuristic::{evaluate, evaluate_line};
pub use scores::{terminal_score, Score};
