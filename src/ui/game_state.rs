//! Game state management for the tic-tac-toe GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::board::{Mark, Pos};
use crate::engine::{Engine, MoveResult};
use crate::error::Result;
use crate::game::Game;
use crate::rules::{winning_line, GameStatus, Line};

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Main game state for one board size
pub struct GameState<const N: usize> {
    pub game: Game<N>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl<const N: usize> GameState<N> {
    pub fn new(first: Mark, depth: u8) -> Self {
        Self {
            game: Game::new(first, Engine::with_depth(depth)),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// Check if the engine is currently searching
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Clicks are accepted only on the human's turn with no search running
    pub fn accepts_input(&self) -> bool {
        self.game.is_human_turn() && !self.is_ai_thinking()
    }

    /// Completed line to highlight, if the game was won
    pub fn winning_line(&self) -> Option<Line<N>> {
        winning_line(self.game.board()).map(|(_, line)| line)
    }

    /// Play the human's move at `pos`
    pub fn try_place(&mut self, pos: Pos) -> Result<()> {
        self.game.play_human(i32::from(pos.row), i32::from(pos.col))?;
        self.message = None;
        Ok(())
    }

    /// Start a search on a worker thread if it is the engine's turn
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_engine_turn() || self.is_ai_thinking() {
            return;
        }

        let board = *self.game.board();
        let mut engine = self.game.engine().clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.best_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the worker's move once it has arrived
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine stopped without a move".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_result = Some(result);

        let Some(pos) = result.best_move else {
            self.message = Some("Engine found no move".to_string());
            return;
        };
        if let Err(err) = self.game.apply_engine_move(pos) {
            warn!(%err, "engine move rejected");
            self.message = Some(err.to_string());
        }
    }

    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Take back the last human move and the engine reply
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if self.game.undo() > 0 {
            self.message = None;
        }
    }
}
