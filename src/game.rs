//! Game session: turn order, move validation and win detection
//!
//! [`Game`] owns the board and keeps the forbidden overlay current after
//! every committed move. The AI plays through the same validated path as a
//! human, so an illegal engine move can never reach the board.

use derive_more::{Display, Error};
use tracing::{debug, info};

use crate::board::{Board, Move, Pos, Stone};
use crate::engine::AIEngine;
use crate::rules::{check_win, classify_forbidden, forbidden_overlay, winning_line, ForbiddenKind, ForbiddenOverlay};

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("game is already over")]
    GameOver,
    #[display("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[display("{pos} is already occupied")]
    Occupied { pos: Pos },
    #[display("{pos} is forbidden for black ({kind})")]
    Forbidden { pos: Pos, kind: ForbiddenKind },
}

/// Result of a committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Play goes on with `next` to move
    Continue { next: Stone },
    /// The move made exactly five
    Won { winner: Stone, line: Option<[Pos; 5]> },
}

/// What [`Game::auto_move`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoMove {
    Played { pos: Pos, outcome: PlaceOutcome },
    /// No usable move; the turn went to the other player
    Passed,
    /// The board was full, so a fresh game was started
    Reset,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    overlay: ForbiddenOverlay,
    current_turn: Stone,
    winner: Option<Stone>,
    last_move: Option<Pos>,
    history: Vec<Move>,
}

impl Game {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            overlay: ForbiddenOverlay::empty(),
            current_turn: Stone::Black,
            winner: None,
            last_move: None,
            history: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Forbidden classification of every empty cell for Black
    pub fn overlay(&self) -> &ForbiddenOverlay {
        &self.overlay
    }

    pub fn current_turn(&self) -> Stone {
        self.current_turn
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// [`Game::place_stone`] from raw coordinates.
    pub fn place_at(&mut self, row: i32, col: i32) -> Result<PlaceOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        self.place_stone(Pos::new(row as u8, col as u8))
    }

    /// Validate and commit a stone for the player to move.
    ///
    /// A rejected move leaves the board, turn and overlay untouched.
    pub fn place_stone(&mut self, pos: Pos) -> Result<PlaceOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        if !Pos::is_valid(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied { pos });
        }

        let color = self.current_turn;
        if color.is_constrained() {
            let kind = classify_forbidden(&mut self.board, pos);
            if kind.is_forbidden() {
                debug!(%pos, %kind, "forbidden move rejected");
                return Err(MoveError::Forbidden { pos, kind });
            }
        }

        self.board.place_stone(pos, color);
        self.history.push(Move::new(pos, color));
        self.last_move = Some(pos);
        debug!(%color, %pos, move_number = self.history.len(), "stone placed");

        let outcome = if check_win(&self.board, pos, color) {
            self.winner = Some(color);
            info!(%color, moves = self.history.len(), "game won");
            PlaceOutcome::Won {
                winner: color,
                line: winning_line(&self.board, pos, color),
            }
        } else {
            self.current_turn = color.opponent();
            PlaceOutcome::Continue {
                next: self.current_turn,
            }
        };

        self.overlay = forbidden_overlay(&mut self.board);
        Ok(outcome)
    }

    /// Give the turn to the other player without moving.
    pub fn pass_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
        debug!(next = %self.current_turn, "turn passed");
    }

    /// Let `engine` choose and commit a move for the player to move.
    ///
    /// Returns `Ok(None)` when the engine finds nowhere to play.
    pub fn ai_move(&mut self, engine: &mut AIEngine) -> Result<Option<(Pos, PlaceOutcome)>, MoveError> {
        let deep = engine.config().deep_search;
        self.ai_move_with(engine, deep)
    }

    /// [`Game::ai_move`] with an explicit choice of fallback.
    pub fn ai_move_with(&mut self, engine: &mut AIEngine, deep: bool) -> Result<Option<(Pos, PlaceOutcome)>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let me = self.current_turn;
        match engine.request_move(&mut self.board, me, me.opponent(), deep) {
            Some(pos) => self.place_stone(pos).map(|outcome| Some((pos, outcome))),
            None => Ok(None),
        }
    }

    /// Turn-timeout move: a fast engine move for the player to move.
    ///
    /// A full board starts a new game; when no legal move comes back the
    /// turn passes instead.
    pub fn auto_move(&mut self, engine: &mut AIEngine) -> Result<AutoMove, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.board.is_full() {
            self.reset();
            return Ok(AutoMove::Reset);
        }
        match self.ai_move_with(engine, false) {
            Ok(Some((pos, outcome))) => Ok(AutoMove::Played { pos, outcome }),
            Ok(None) | Err(_) => {
                self.pass_turn();
                Ok(AutoMove::Passed)
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
