//! Results of selecting a cell.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: who marked which cell, and where the game stands now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The cell that was marked.
    pub position: Position,
    /// The player whose mark was placed.
    pub player: Player,
    /// Status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// Checks if this move ended the game.
    pub fn ended_game(&self) -> bool {
        self.status.is_over()
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A rejected move. The engine is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already carries a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game is won or drawn; call `reset` to play again.
    #[display("Game has already ended")]
    GameAlreadyEnded,

    /// Index past the last cell.
    #[display("Cell index {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
