//! Turn controller
//!
//! Alternates human and engine turns on one board, rejects moves made out
//! of turn or after the game ended, and keeps the move history so a game
//! can be rolled back.

use tracing::trace;

use crate::board::{Board, Mark, Pos};
use crate::engine::{Engine, MoveResult};
use crate::error::{Error, Result, Side};
use crate::rules::{apply_human_move, game_status, validate_move, GameStatus};

/// One game between a human (`O`) and the engine (`X`).
#[derive(Debug, Clone)]
pub struct Game<const N: usize> {
    board: Board<N>,
    first: Mark,
    to_move: Mark,
    status: GameStatus,
    history: Vec<(Pos, Mark)>,
    engine: Engine,
}

impl<const N: usize> Game<N> {
    /// New game where `first` moves first.
    ///
    /// Passing [`Mark::Empty`] lets the human start.
    pub fn new(first: Mark, engine: Engine) -> Self {
        let first = if first == Mark::Empty { Mark::Human } else { first };
        Self {
            board: Board::new(),
            first,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(N * N),
            engine,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        N
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Side to move; meaningless once the game is over
    #[inline]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    #[inline]
    pub fn first(&self) -> Mark {
        self.first
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.to_move == Mark::Human
    }

    pub fn is_engine_turn(&self) -> bool {
        !self.is_over() && self.to_move == Mark::Engine
    }

    /// Moves played so far, oldest first
    pub fn history(&self) -> &[(Pos, Mark)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Play the human move at 0-based `(row, col)`.
    ///
    /// Invalid coordinates leave the game unchanged and return
    /// [`Error::InvalidMove`] so the caller can ask again.
    pub fn play_human(&mut self, row: i32, col: i32) -> Result<GameStatus> {
        self.check_turn(Mark::Human)?;
        let pos = apply_human_move(&mut self.board, row, col)?;
        Ok(self.record(pos, Mark::Human))
    }

    /// Let the engine search and play its move.
    pub fn play_engine(&mut self) -> Result<MoveResult> {
        self.check_turn(Mark::Engine)?;
        let result = self.engine.best_move_with_stats(&self.board);
        match result.best_move {
            Some(pos) => {
                self.board.place(pos, Mark::Engine);
                self.record(pos, Mark::Engine);
                Ok(result)
            }
            // A full board is always terminal, so this is only reached on
            // a corrupted game.
            None => Err(Error::GameOver),
        }
    }

    /// Apply an engine move computed elsewhere (e.g. on a worker thread).
    pub fn apply_engine_move(&mut self, pos: Pos) -> Result<GameStatus> {
        self.check_turn(Mark::Engine)?;
        let pos = validate_move(&self.board, i32::from(pos.row), i32::from(pos.col))?;
        self.board.place(pos, Mark::Engine);
        Ok(self.record(pos, Mark::Engine))
    }

    /// Roll back to the human's previous turn.
    ///
    /// Pops moves up to and including the most recent human move and
    /// returns how many were removed. Nothing is removed if the human has
    /// not moved yet.
    pub fn undo(&mut self) -> usize {
        let Some(last_human) = self.history.iter().rposition(|&(_, mark)| mark == Mark::Human) else {
            return 0;
        };
        let removed = self.history.len() - last_human;
        self.history.truncate(last_human);
        self.replay();
        trace!(removed, remaining = self.history.len(), "undo");
        removed
    }

    /// Start over with the same first player and engine.
    pub fn reset(&mut self) {
        self.history.clear();
        self.replay();
    }

    fn check_turn(&self, mark: Mark) -> Result<()> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if self.to_move != mark {
            return Err(Error::NotYourTurn(Side(mark)));
        }
        Ok(())
    }

    fn record(&mut self, pos: Pos, mark: Mark) -> GameStatus {
        self.history.push((pos, mark));
        self.status = game_status(&self.board);
        self.to_move = mark.opponent();
        trace!(%pos, %mark, status = %self.status, "move played");
        self.status
    }

    /// Rebuild the board from the history
    fn replay(&mut self) {
        self.board = Board::new();
        for &(pos, mark) in &self.history {
            self.board.place(pos, mark);
        }
        self.status = game_status(&self.board);
        self.to_move = self
            .history
            .last()
            .map_or(self.first, |&(_, mark)| mark.opponent());
    }
}
