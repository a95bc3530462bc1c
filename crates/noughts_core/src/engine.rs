//! The game engine.

use super::action::{MoveError, MoveOutcome};
use super::invariants::{EngineInvariants, InvariantSet};
use super::rules;
use super::{Board, Cell, GameStatus, Line, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Owns the board, the turn indicator and the game status.
///
/// All mutation goes through [`GameEngine::select_cell`] and
/// [`GameEngine::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
}

/// Everything a view needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub cells: [Cell; 9],
    /// Player to move next.
    pub to_move: Player,
    /// Current status, with winner and line once won.
    pub status: GameStatus,
}

impl GameEngine {
    /// Creates an engine with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the cell at `index` (0-8) for the player to move.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// - [`MoveError::GameAlreadyEnded`] once the game is won or drawn.
    /// - [`MoveError::OutOfBounds`] if `index` is past the last cell.
    /// - [`MoveError::CellOccupied`] if the cell already carries a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn select_cell(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            debug!(status = %self.status, "Rejected move after game end");
            return Err(MoveError::GameAlreadyEnded);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Marks `pos` for the player to move. See [`GameEngine::select_cell`].
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn select(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.select_cell(pos.to_index())
    }

    fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied cell");
            return Err(MoveError::CellOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Cell::Occupied(player));
        self.status = rules::evaluate(&self.board);
        if !self.status.is_over() {
            self.to_move = player.opponent();
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after {player} -> {pos}"
        );

        match self.status {
            GameStatus::InProgress => debug!(position = %pos, "Move applied"),
            status => info!(position = %pos, %status, board = %self.board, "Game over"),
        }

        Ok(MoveOutcome {
            position: pos,
            player,
            status: self.status,
        })
    }

    /// Starts a new game: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `index`, `None` past the last cell.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.get_index(index)
    }

    /// Returns the player to move next.
    ///
    /// Once the game has ended this stays on the player who made the
    /// final move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks if the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The completed line, once the game is won.
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Copies out the state a view renders from.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: *self.board.cells(),
            to_move: self.to_move,
            status: self.status,
        }
    }
}
